use std::time::{Duration, Instant};

use crate::types::{Point, WalkParams};
use crate::viewport::Extent;
use crate::walk::TurningWalk;

/// Owns the generator, the bounding extent and the playback parameters,
/// and drives them through the Stopped/Running state machine. All mutation
/// of walk state funnels through here; the render adapter only reads.
///
/// A redraw is a logical event counted by `frames()`: each tick while
/// running, each `single_step`, and each `reset` schedules exactly one.
pub struct Playback {
    walk: TurningWalk,
    extent: Extent,
    params: WalkParams,
    running: bool,
    frames: u64,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            walk: TurningWalk::new(),
            extent: Extent::at_origin(),
            params: WalkParams::default(),
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("playback started at {:.1} Hz", self.params.tick_rate_hz);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("playback stopped with {} points", self.walk.points().len());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One scheduled tick: a no-op when stopped, otherwise `steps_per_tick`
    /// generator steps followed by one redraw. Returns whether a redraw
    /// was scheduled.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        for _ in 0..self.params.steps_per_tick {
            self.advance();
        }
        self.frames += 1;
        true
    }

    /// Advances the walk by `count` points and schedules one redraw,
    /// regardless of state and without changing it. A zero count is
    /// malformed input and ignored.
    pub fn single_step(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        for _ in 0..count {
            self.advance();
        }
        self.frames += 1;
    }

    /// Stops playback, returns walk and extent to their initial state and
    /// schedules one redraw of the empty scene.
    pub fn reset(&mut self) {
        let discarded = self.walk.points().len();
        self.running = false;
        self.walk.reset();
        self.extent = Extent::at_origin();
        self.frames += 1;
        if discarded > 0 {
            log::info!("walk reset, {discarded} points discarded");
        }
    }

    fn advance(&mut self) {
        let p = self.walk.step(self.params.step_len, self.params.turn_delta_deg);
        self.extent.include(p);
    }

    /// Delay until the next tick, derived from the current tick rate on
    /// every call so rate changes apply on the very next tick.
    pub fn tick_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.params.tick_rate_hz)
    }

    pub fn points(&self) -> &[Point] {
        self.walk.points()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn params(&self) -> WalkParams {
        self.params
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // Parameter setters. Malformed input is rejected silently and the
    // previous value retained; nothing here ever fails or reports.

    pub fn set_step_len(&mut self, value: f64) {
        if value.is_finite() {
            self.params.step_len = value;
            self.after_param_change();
        }
    }

    pub fn set_turn_delta(&mut self, value: f64) {
        if value.is_finite() {
            self.params.turn_delta_deg = value;
            self.after_param_change();
        }
    }

    pub fn set_tick_rate(&mut self, value: f64) {
        if value.is_finite() && value > 0.0 {
            self.params.tick_rate_hz = value;
            self.after_param_change();
        }
    }

    pub fn set_steps_per_tick(&mut self, value: u32) {
        if value > 0 {
            self.params.steps_per_tick = value;
            self.after_param_change();
        }
    }

    /// Toggling the flag itself never restarts the walk.
    pub fn set_reset_on_change(&mut self, value: bool) {
        self.params.reset_on_change = value;
    }

    fn after_param_change(&mut self) {
        if self.params.reset_on_change {
            self.reset();
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Repeating-tick schedule decoupled from any platform timer. The caller
/// supplies the current time and the period on every poll, so a changed
/// period is honored on the next poll without re-arming anything.
pub struct TickClock {
    last_fire: Option<Instant>,
}

impl TickClock {
    pub fn new() -> Self {
        Self { last_fire: None }
    }

    /// True when a tick is due: on the first poll, and whenever `period`
    /// has elapsed since the previous firing.
    pub fn due(&mut self, now: Instant, period: Duration) -> bool {
        let fire = match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= period,
        };
        if fire {
            self.last_fire = Some(now);
        }
        fire
    }

    /// Disarms the clock so the next poll fires immediately.
    pub fn rewind(&mut self) {
        self.last_fire = None;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
