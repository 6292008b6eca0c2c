//! Host scheduling collaborators.
//!
//! The engine never blocks or spawns. It asks the host for a next-frame callback or a one-shot
//! delay and gets back a handle; the host later reports the handle as fired through
//! [`crate::Segment::handle_event`]. Handles are compared on delivery, so a callback that fires
//! after it was cancelled (or that belongs to another instance) is ignored.

use std::time::Duration;

use crate::foundation::core::{FrameHandle, TimerHandle};

/// Deterministic scheduler with a simulated clock.
pub mod manual;

/// Frame and timer primitives supplied by the host event loop.
pub trait Scheduler {
    /// Current host time, measured from an arbitrary fixed epoch.
    fn now(&self) -> Duration;

    /// Ask for a single callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a frame request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Ask for a single callback after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer. Unknown or already fired handles are ignored.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// A fired host callback, routed back to the instance that requested it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HostEvent {
    /// A next-frame request came due.
    Frame(FrameHandle),
    /// A delay timer elapsed.
    Timeout(TimerHandle),
}
