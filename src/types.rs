/// A single world-space vertex of the walk. Never mutated once generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Playback parameters, owned by the controller and mutated only through
/// its setters. All angles are in degrees; the conversion to radians
/// happens once, at the trig call in `walk::TurningWalk::step`.
#[derive(Clone, Copy, Debug)]
pub struct WalkParams {
    /// Distance travelled per step, world units. Any sign is meaningful.
    pub step_len: f64,
    /// Per-step growth of the heading increment, degrees.
    pub turn_delta_deg: f64,
    /// Animation tick rate, ticks per second.
    pub tick_rate_hz: f64,
    /// Generator steps performed per tick.
    pub steps_per_tick: u32,
    /// When set, accepted parameter changes restart the walk.
    pub reset_on_change: bool,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            step_len: 20.0,
            turn_delta_deg: 10.0,
            tick_rate_hz: 60.0,
            steps_per_tick: 1,
            reset_on_change: false,
        }
    }
}
