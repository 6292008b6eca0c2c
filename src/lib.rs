//! Draw and animate a sub-range of a vector path's stroke.
//!
//! A path of total length `L` shows only `begin..end` by applying a dash pattern together with
//! the fixed dash offset `2L`. [`compute_descriptor`] produces that pattern, including ranges that
//! reach past either end of the path, and in circular mode ranges that wrap around it.
//!
//! [`Segment`] binds one [`PathSurface`] and animates its range over time. It never blocks or
//! spawns: frames and delays are requested from a host [`Scheduler`], and the host reports them
//! back through [`Segment::handle_event`]. [`ManualScheduler`] is a simulated host for tests and
//! offline use.
//!
//! ```
//! use std::time::Duration;
//! use stroke_segment::{DrawOptions, Ease, ManualScheduler, Segment, StrokePath};
//!
//! let path = StrokePath::from_svg("M0 0 L100 0")?;
//! let mut seg = Segment::with_range(path, "10%", "90%", false)?;
//! assert_eq!(seg.path().dash_array().map(|d| d.to_string()), Some("100 110 80".into()));
//!
//! let mut sched = ManualScheduler::at_fps(60)?;
//! let options = DrawOptions::new().easing(Ease::InOutCubic);
//! seg.draw(&mut sched, "50% - 10", "50% + 10", Duration::from_millis(500), options)?;
//! sched.run(1000, |sched, event| {
//!     seg.handle_event(sched, event);
//! });
//! assert_eq!((seg.begin(), seg.end()), (40.0, 60.0));
//! # Ok::<(), stroke_segment::SegmentError>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
pub mod geometry;
pub mod host;
pub mod surface;

pub use animation::ease::Ease;
pub use animation::options::{CompleteFn, DrawOptions, DrawRequest, Easing, UpdateFn};
pub use animation::segment::{AnimationState, Segment, SegmentState};
pub use foundation::core::{BezPath, FrameHandle, PathSeg, Point, TimerHandle, secs_to_duration};
pub use foundation::error::{SegmentError, SegmentResult};
pub use geometry::dash::{DashArray, compute_descriptor, dash_offset, fold_range};
pub use geometry::normalize::normalize_range;
pub use geometry::value::{Endpoint, LengthExpr, resolve_value};
pub use host::manual::ManualScheduler;
pub use host::{HostEvent, Scheduler};
pub use surface::PathSurface;
pub use surface::stroke::StrokePath;
