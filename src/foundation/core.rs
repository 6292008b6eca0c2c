use std::time::Duration;

use crate::foundation::error::{SegmentError, SegmentResult};

pub use kurbo::{BezPath, PathSeg, Point};

/// Token for a pending next-frame callback issued by a [`crate::Scheduler`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameHandle(pub u64);

/// Token for a pending one-shot delay timer issued by a [`crate::Scheduler`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerHandle(pub u64);

/// Convert a seconds value from a request into a [`Duration`].
///
/// Values `<= 0` collapse to [`Duration::ZERO`]; NaN and infinities are rejected.
pub fn secs_to_duration(secs: f64) -> SegmentResult<Duration> {
    if !secs.is_finite() {
        return Err(SegmentError::validation(format!(
            "seconds must be finite, got {secs}"
        )));
    }
    if secs <= 0.0 {
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| SegmentError::validation(format!("seconds out of range: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
