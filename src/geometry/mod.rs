//! Range geometry: turning a logical `begin..end` sub-range of a path into a dash pattern.
//!
//! Everything here is pure. The animation engine calls into it once per rendered frame, and the
//! instant draw path calls it directly.

/// Dash descriptor encoding and evaluation.
pub mod dash;
/// Per-frame normalization of interpolated endpoint pairs.
pub mod normalize;
/// Endpoint values and percentage expressions.
pub mod value;
