use std::{fmt, time::Duration};

use crate::{
    animation::options::{CompleteFn, DrawOptions, DrawRequest, Easing, UpdateFn},
    foundation::core::{FrameHandle, TimerHandle},
    foundation::error::{SegmentError, SegmentResult},
    geometry::dash::{compute_descriptor, dash_offset, fold_range},
    geometry::normalize::{lerp, normalize_range},
    geometry::value::{Endpoint, resolve_value},
    host::{HostEvent, Scheduler},
    surface::PathSurface,
};

/// Where an instance is in its animation lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Nothing scheduled.
    Idle,
    /// Waiting out a start delay; a timer is pending.
    Delayed,
    /// Interpolating; a frame is pending.
    Playing,
    /// Interpolation frozen; nothing pending.
    Paused,
}

/// Copyable view of an instance, handed to per-frame callbacks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentState {
    /// Current (folded) begin.
    pub begin: f64,
    /// Current (folded) end.
    pub end: f64,
    /// Measured path length.
    pub total_length: f64,
    /// Circular mode.
    pub circular: bool,
    /// Lifecycle state.
    pub state: AnimationState,
    /// Linear progress of the running animation, capped at 1; `None` outside a frame.
    pub progress: Option<f64>,
}

struct Tween<P> {
    start: Duration,
    duration: Duration,
    initial: (f64, f64),
    target: (f64, f64),
    easing: Option<Easing>,
    update: Option<UpdateFn>,
    callback: Option<CompleteFn<P>>,
}

impl<P> Tween<P> {
    fn progress_at(&self, now: Duration) -> f64 {
        now.saturating_sub(self.start).as_secs_f64() / self.duration.as_secs_f64()
    }
}

struct PendingDraw<P> {
    target: (f64, f64),
    duration: Duration,
    options: DrawOptions<P>,
}

enum Playback<P> {
    Idle,
    Delayed(PendingDraw<P>),
    Playing(Tween<P>),
    Paused { tween: Tween<P>, paused_at: Duration },
}

/// One path whose visible sub-range is drawn and animated through its dash pattern.
///
/// The instance owns the path surface and at most one pending frame request and one pending
/// delay timer. Scheduling goes through the [`Scheduler`] passed to each call; fired callbacks
/// come back through [`Segment::handle_event`].
pub struct Segment<P> {
    path: P,
    total_length: f64,
    begin: f64,
    end: f64,
    circular: bool,
    playback: Playback<P>,
    frame: Option<FrameHandle>,
    timer: Option<TimerHandle>,
}

impl<P: PathSurface> Segment<P> {
    /// Bind to `path` and show all of it.
    pub fn new(path: P) -> SegmentResult<Self> {
        Self::from_endpoints(path, None, None, false)
    }

    /// Bind to `path` and show `begin..end`.
    pub fn with_range(
        path: P,
        begin: impl Into<Endpoint>,
        end: impl Into<Endpoint>,
        circular: bool,
    ) -> SegmentResult<Self> {
        Self::from_endpoints(path, Some(begin.into()), Some(end.into()), circular)
    }

    /// Bind to `path` with optional endpoints. A missing `begin` is `0` and a missing `end` is
    /// the total length.
    pub fn from_endpoints(
        path: P,
        begin: Option<Endpoint>,
        end: Option<Endpoint>,
        circular: bool,
    ) -> SegmentResult<Self> {
        let mut seg = Self {
            path,
            total_length: 0.0,
            begin: 0.0,
            end: 0.0,
            circular,
            playback: Playback::Idle,
            frame: None,
            timer: None,
        };
        seg.reset()?;

        let begin = match begin {
            Some(b) => resolve_value(&b, seg.total_length)?,
            None => 0.0,
        };
        let end = match end {
            Some(e) => resolve_value(&e, seg.total_length)?,
            None => seg.total_length,
        };
        seg.render(begin, end);
        Ok(seg)
    }

    /// Re-measure the path and re-apply the dash offset.
    ///
    /// Endpoints and animation state are left alone; a running animation keeps interpolating
    /// between its already resolved values.
    pub fn reset(&mut self) -> SegmentResult<()> {
        let length = self.path.total_length();
        if !length.is_finite() || length < 0.0 {
            return Err(SegmentError::validation(format!(
                "path length must be finite and >= 0, got {length}"
            )));
        }
        self.total_length = length;
        self.path.apply_dash_offset(dash_offset(length));
        tracing::debug!(total_length = length, "segment measured");
        Ok(())
    }

    /// Draw `begin..end` immediately, outside the animation state machine.
    ///
    /// A running animation is not cancelled and overwrites this on its next frame.
    pub fn draw_instant(
        &mut self,
        begin: impl Into<Endpoint>,
        end: impl Into<Endpoint>,
        circular: bool,
    ) -> SegmentResult<()> {
        let begin = resolve_value(&begin.into(), self.total_length)?;
        let end = resolve_value(&end.into(), self.total_length)?;
        self.circular = circular;
        self.render(begin, end);
        Ok(())
    }

    /// Draw `begin..end`, animated over `duration` when it is non-zero.
    ///
    /// Both endpoints are resolved up front, so a malformed expression fails here and never
    /// reaches the frame loop. A zero duration is exactly [`Segment::draw_instant`]. Otherwise
    /// any pending frame or timer is cancelled first, then the animation starts now or after
    /// `options.delay`. Interpolation starts from the endpoints current when it starts.
    #[tracing::instrument(level = "debug", skip_all, fields(duration = ?duration))]
    pub fn draw(
        &mut self,
        sched: &mut dyn Scheduler,
        begin: impl Into<Endpoint>,
        end: impl Into<Endpoint>,
        duration: Duration,
        options: DrawOptions<P>,
    ) -> SegmentResult<()> {
        let begin = resolve_value(&begin.into(), self.total_length)?;
        let end = resolve_value(&end.into(), self.total_length)?;

        if duration.is_zero() {
            self.circular = options.circular;
            self.render(begin, end);
            return Ok(());
        }

        self.stop(sched);
        self.circular = options.circular;

        if !options.delay.is_zero() {
            let delay = options.delay;
            self.timer = Some(sched.set_timeout(delay));
            self.playback = Playback::Delayed(PendingDraw {
                target: (begin, end),
                duration,
                options,
            });
            tracing::debug!(?delay, "segment animation delayed");
            return Ok(());
        }

        self.start(sched, (begin, end), duration, options);
        Ok(())
    }

    /// Run a [`DrawRequest`].
    pub fn submit(&mut self, sched: &mut dyn Scheduler, request: &DrawRequest) -> SegmentResult<()> {
        let duration = request.duration()?;
        let options = request.options()?;
        self.draw(
            sched,
            request.begin.clone(),
            request.end.clone(),
            duration,
            options,
        )
    }

    /// Freeze a playing animation. No-op in any other state.
    pub fn pause(&mut self, sched: &mut dyn Scheduler) {
        if !matches!(self.playback, Playback::Playing(_)) {
            return;
        }
        if let Some(handle) = self.frame.take() {
            sched.cancel_frame(handle);
        }
        if let Playback::Playing(tween) = std::mem::replace(&mut self.playback, Playback::Idle) {
            let paused_at = sched.now();
            tracing::debug!(?paused_at, "segment animation paused");
            self.playback = Playback::Paused { tween, paused_at };
        }
    }

    /// Continue a paused animation; the paused interval does not count toward progress.
    /// No-op in any other state.
    pub fn resume(&mut self, sched: &mut dyn Scheduler) {
        if !matches!(self.playback, Playback::Paused { .. }) {
            return;
        }
        if let Playback::Paused {
            mut tween,
            paused_at,
        } = std::mem::replace(&mut self.playback, Playback::Idle)
        {
            let gap = sched.now().saturating_sub(paused_at);
            tween.start += gap;
            tracing::debug!(?gap, "segment animation resumed");
            self.playback = Playback::Playing(tween);
            self.frame = Some(sched.request_frame());
        }
    }

    /// Cancel any pending frame and timer and drop the animation. Idempotent.
    ///
    /// Handles are cleared before they are cancelled, so a callback that still arrives for them
    /// is ignored by [`Segment::handle_event`].
    pub fn stop(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.frame.take() {
            sched.cancel_frame(handle);
        }
        if let Some(handle) = self.timer.take() {
            sched.clear_timeout(handle);
        }
        if !matches!(self.playback, Playback::Idle) {
            tracing::debug!("segment animation stopped");
            self.playback = Playback::Idle;
        }
    }

    /// Deliver a fired host callback. Returns `false` when the event is not this instance's
    /// pending frame or timer (stale, cancelled, or another instance's), in which case nothing
    /// happens.
    pub fn handle_event(&mut self, sched: &mut dyn Scheduler, event: HostEvent) -> bool {
        match event {
            HostEvent::Frame(handle) => {
                if self.frame != Some(handle) {
                    return false;
                }
                self.frame = None;
                self.tick(sched);
            }
            HostEvent::Timeout(handle) => {
                if self.timer != Some(handle) {
                    return false;
                }
                self.timer = None;
                if let Playback::Delayed(pending) =
                    std::mem::replace(&mut self.playback, Playback::Idle)
                {
                    self.start(sched, pending.target, pending.duration, pending.options);
                }
            }
        }
        true
    }

    /// Stop and give back the path surface.
    pub fn into_path(mut self, sched: &mut dyn Scheduler) -> P {
        self.stop(sched);
        self.path
    }

    fn start(
        &mut self,
        sched: &mut dyn Scheduler,
        target: (f64, f64),
        duration: Duration,
        options: DrawOptions<P>,
    ) {
        let initial = (self.begin, self.end);
        tracing::debug!(?initial, ?target, ?duration, "segment animation started");
        self.playback = Playback::Playing(Tween {
            start: sched.now(),
            duration,
            initial,
            target,
            easing: options.easing,
            update: options.update,
            callback: options.callback,
        });
        self.frame = Some(sched.request_frame());
    }

    fn tick(&mut self, sched: &mut dyn Scheduler) {
        let Playback::Playing(tween) = &self.playback else {
            return;
        };
        let progress = tween.progress_at(sched.now());
        let done = progress >= 1.0;
        let t = if done {
            1.0
        } else {
            tween
                .easing
                .as_ref()
                .map(|easing| easing.apply(progress))
                .filter(|eased| eased.is_finite())
                .unwrap_or(progress)
        };
        let (initial, target) = (tween.initial, tween.target);
        tracing::trace!(progress, t, "segment frame");

        if done {
            let Playback::Playing(mut tween) =
                std::mem::replace(&mut self.playback, Playback::Idle)
            else {
                return;
            };
            self.step(initial, target, t);
            if let Some(update) = tween.update.as_mut() {
                update(&self.frame_state(1.0));
            }
            tracing::debug!(begin = self.begin, end = self.end, "segment animation complete");
            if let Some(callback) = tween.callback.take() {
                callback(self, sched);
            }
            return;
        }

        self.step(initial, target, t);
        let state = self.frame_state(progress.max(0.0));
        if let Playback::Playing(tween) = &mut self.playback {
            if let Some(update) = tween.update.as_mut() {
                update(&state);
            }
        }
        self.frame = Some(sched.request_frame());
    }

    fn step(&mut self, initial: (f64, f64), target: (f64, f64), t: f64) {
        let begin = lerp(initial.0, target.0, t);
        let end = lerp(initial.1, target.1, t);
        let (begin, end) = normalize_range(begin, end, self.total_length, self.circular);
        self.render(begin, end);
    }

    fn render(&mut self, begin: f64, end: f64) {
        let dash = compute_descriptor(begin, end, self.total_length, self.circular);
        (self.begin, self.end) = if self.circular {
            fold_range(begin, end, self.total_length)
        } else {
            (begin, end)
        };
        self.path.apply_dash_array(&dash);
    }

    fn frame_state(&self, progress: f64) -> SegmentState {
        SegmentState {
            progress: Some(progress.min(1.0)),
            ..self.snapshot()
        }
    }
}

impl<P> Segment<P> {
    /// Current begin, folded in circular mode.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Current end, folded in circular mode.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length measured at construction or the last [`Segment::reset`].
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Whether endpoints wrap around the path.
    pub fn circular(&self) -> bool {
        self.circular
    }

    /// Lifecycle state.
    pub fn state(&self) -> AnimationState {
        match self.playback {
            Playback::Idle => AnimationState::Idle,
            Playback::Delayed(_) => AnimationState::Delayed,
            Playback::Playing(_) => AnimationState::Playing,
            Playback::Paused { .. } => AnimationState::Paused,
        }
    }

    /// Pending frame request, if playing.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Pending delay timer, if delayed.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// The bound path surface.
    pub fn path(&self) -> &P {
        &self.path
    }

    /// The bound path surface, mutably. Call [`Segment::reset`] after changing its geometry.
    pub fn path_mut(&mut self) -> &mut P {
        &mut self.path
    }

    /// Copyable view of the instance.
    pub fn snapshot(&self) -> SegmentState {
        SegmentState {
            begin: self.begin,
            end: self.end,
            total_length: self.total_length,
            circular: self.circular,
            state: self.state(),
            progress: None,
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Segment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("path", &self.path)
            .field("total_length", &self.total_length)
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("circular", &self.circular)
            .field("state", &self.state())
            .field("frame", &self.frame)
            .field("timer", &self.timer)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
