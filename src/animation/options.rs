use std::{fmt, rc::Rc, time::Duration};

use crate::{
    animation::ease::Ease,
    animation::segment::{Segment, SegmentState},
    foundation::core::secs_to_duration,
    foundation::error::SegmentResult,
    geometry::value::Endpoint,
    host::Scheduler,
};

/// Per-frame callback, invoked after every rendered frame of an animation.
pub type UpdateFn = Box<dyn FnMut(&SegmentState)>;

/// Completion callback, invoked once after the final frame. It may start another draw or stop.
pub type CompleteFn<P> = Box<dyn FnOnce(&mut Segment<P>, &mut dyn Scheduler)>;

/// Maps linear progress to eased progress.
#[derive(Clone)]
pub enum Easing {
    /// A built-in curve.
    Preset(Ease),
    /// A caller-supplied function.
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl Easing {
    /// Wrap a closure.
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Evaluate at `t`.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Preset(ease) => ease.apply(t),
            Self::Custom(f) => f(t),
        }
    }
}

impl From<Ease> for Easing {
    fn from(ease: Ease) -> Self {
        Self::Preset(ease)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(ease) => f.debug_tuple("Preset").field(ease).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for a timed [`Segment::draw`].
///
/// Every field defaults to "absent": no delay, linear progress, no callbacks, clamping mode.
pub struct DrawOptions<P> {
    /// Wait this long before the animation starts.
    pub delay: Duration,
    /// Easing applied to linear progress.
    pub easing: Option<Easing>,
    /// Called after every rendered frame.
    pub update: Option<UpdateFn>,
    /// Called once when the animation completes (not when it is stopped).
    pub callback: Option<CompleteFn<P>>,
    /// Wrap endpoints around the path instead of clamping them.
    pub circular: bool,
}

impl<P> Default for DrawOptions<P> {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            easing: None,
            update: None,
            callback: None,
            circular: false,
        }
    }
}

impl<P> DrawOptions<P> {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the start delay in seconds; values `<= 0` mean no delay.
    pub fn delay_secs(self, secs: f64) -> SegmentResult<Self> {
        Ok(self.delay(secs_to_duration(secs)?))
    }

    /// Set the easing.
    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Set the per-frame callback.
    pub fn on_update(mut self, f: impl FnMut(&SegmentState) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// Set the completion callback.
    pub fn on_complete(
        mut self,
        f: impl FnOnce(&mut Segment<P>, &mut dyn Scheduler) + 'static,
    ) -> Self {
        self.callback = Some(Box::new(f));
        self
    }

    /// Set circular mode.
    pub fn circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }
}

impl<P> fmt::Debug for DrawOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawOptions")
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("update", &self.update.is_some())
            .field("callback", &self.callback.is_some())
            .field("circular", &self.circular)
            .finish()
    }
}

/// Serializable description of one draw call.
///
/// ```json
/// { "begin": "10%", "end": "90%-5", "duration": 1.5, "delay": 0.2, "ease": "out_cubic" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawRequest {
    /// Target begin.
    pub begin: Endpoint,
    /// Target end.
    pub end: Endpoint,
    /// Animation length in seconds; `<= 0` draws instantly.
    #[serde(default)]
    pub duration: f64,
    /// Start delay in seconds.
    #[serde(default)]
    pub delay: f64,
    /// Easing preset.
    #[serde(default)]
    pub ease: Option<Ease>,
    /// Circular mode.
    #[serde(default)]
    pub circular: bool,
}

impl DrawRequest {
    /// An instant draw to `begin..end`.
    pub fn new(begin: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            duration: 0.0,
            delay: 0.0,
            ease: None,
            circular: false,
        }
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> SegmentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Animation length.
    pub fn duration(&self) -> SegmentResult<Duration> {
        secs_to_duration(self.duration)
    }

    /// Options equivalent to this request, without callbacks.
    pub fn options<P>(&self) -> SegmentResult<DrawOptions<P>> {
        let mut options = DrawOptions::new()
            .delay_secs(self.delay)?
            .circular(self.circular);
        if let Some(ease) = self.ease {
            options = options.easing(ease);
        }
        Ok(options)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/options.rs"]
mod tests;
