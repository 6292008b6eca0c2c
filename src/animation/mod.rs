//! The animation engine: easing curves, draw options and the per-path state machine.

pub(crate) mod bezier;
pub(crate) mod ease;
pub(crate) mod options;
pub(crate) mod segment;
