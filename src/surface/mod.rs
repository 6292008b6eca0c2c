//! Rendering-surface collaborators.
//!
//! A [`PathSurface`] is the only thing the engine knows about the rendered path: it can report its
//! total length and accept a dash descriptor plus offset.

use crate::geometry::dash::DashArray;

/// kurbo-backed surface that records what was applied.
pub mod stroke;

/// A renderable path whose stroke dashing the engine controls.
pub trait PathSurface {
    /// Total traversable length of the path. Called at construction and on reset.
    fn total_length(&self) -> f64;

    /// Apply a dash descriptor (`stroke-dasharray`).
    fn apply_dash_array(&mut self, dash: &DashArray);

    /// Apply the dash offset (`stroke-dashoffset`).
    fn apply_dash_offset(&mut self, offset: f64);
}

impl<T: PathSurface + ?Sized> PathSurface for Box<T> {
    fn total_length(&self) -> f64 {
        (**self).total_length()
    }

    fn apply_dash_array(&mut self, dash: &DashArray) {
        (**self).apply_dash_array(dash);
    }

    fn apply_dash_offset(&mut self, offset: f64) {
        (**self).apply_dash_offset(offset);
    }
}
