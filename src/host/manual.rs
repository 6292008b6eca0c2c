use std::time::Duration;

use crate::{
    foundation::core::{FrameHandle, TimerHandle},
    foundation::error::{SegmentError, SegmentResult},
    host::{HostEvent, Scheduler},
};

/// A [`Scheduler`] driven by hand, for tests, offline rendering and the command line.
///
/// Time only moves through [`ManualScheduler::advance`] and [`ManualScheduler::step`]. Each step
/// is one frame: the clock moves by the frame interval, timers that came due fire in deadline
/// order, then every frame request made before the step fires. Requests made while dispatching a
/// step wait for the next one.
#[derive(Debug)]
pub struct ManualScheduler {
    now: Duration,
    frame_interval: Duration,
    next_id: u64,
    frames: Vec<FrameHandle>,
    timers: Vec<(TimerHandle, Duration)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with the given frame interval.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval,
            next_id: 1,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    /// Create a scheduler that steps at `fps` frames per second.
    pub fn at_fps(fps: u32) -> SegmentResult<Self> {
        if fps == 0 {
            return Err(SegmentError::validation("fps must be > 0"));
        }
        Ok(Self::new(Duration::from_secs(1) / fps))
    }

    /// Time between two steps.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Outstanding frame requests.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Outstanding timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    /// Move the clock forward without firing anything.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Advance one frame interval and return the callbacks that came due.
    pub fn step(&mut self) -> Vec<HostEvent> {
        self.now += self.frame_interval;

        let now = self.now;
        let mut due: Vec<(TimerHandle, Duration)> = Vec::new();
        self.timers.retain(|&(handle, deadline)| {
            if deadline <= now {
                due.push((handle, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(handle, deadline)| (deadline, handle));

        let mut out: Vec<HostEvent> = due
            .into_iter()
            .map(|(handle, _)| HostEvent::Timeout(handle))
            .collect();
        out.extend(self.frames.drain(..).map(HostEvent::Frame));
        out
    }

    /// Step until nothing is scheduled or `max_steps` steps ran, handing every event to
    /// `dispatch`. Returns the number of steps taken.
    pub fn run<F>(&mut self, max_steps: usize, mut dispatch: F) -> usize
    where
        F: FnMut(&mut Self, HostEvent),
    {
        let mut steps = 0;
        while steps < max_steps && !self.is_idle() {
            for event in self.step() {
                dispatch(self, event);
            }
            steps += 1;
        }
        steps
    }

    fn issue(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.issue());
        self.frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|&h| h != handle);
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.issue());
        self.timers.push((handle, self.now + delay));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|&(h, _)| h != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/manual.rs"]
mod tests;
