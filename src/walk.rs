use crate::types::Point;

/// Generator for the turning walk: each step moves one `step_len` along the
/// current heading, then the heading advances by an increment that itself
/// grows by `turn_delta_deg` every step, so the curvature compounds.
///
/// Heading and increment are kept in degrees and converted at the trig
/// call. With the increment growing before the heading advances, point `k`
/// (1-indexed) is laid down at heading `delta * k*(k-1)/2`: for a 10-degree
/// delta the first three points sit at 0, 10 and 30 degrees.
pub struct TurningWalk {
    x: f64,
    y: f64,
    heading_deg: f64,
    turn_deg: f64,
    points: Vec<Point>,
}

impl TurningWalk {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading_deg: 0.0,
            turn_deg: 0.0,
            points: Vec::new(),
        }
    }

    /// Advances the walk by one point and returns it.
    pub fn step(&mut self, step_len: f64, turn_delta_deg: f64) -> Point {
        let rad = self.heading_deg.to_radians();
        self.x += step_len * rad.cos();
        self.y += step_len * rad.sin();

        let point = Point::new(self.x, self.y);
        self.points.push(point);

        self.turn_deg += turn_delta_deg;
        self.heading_deg = (self.heading_deg + self.turn_deg).rem_euclid(360.0);

        point
    }

    /// Returns the walk to the state of a freshly constructed generator:
    /// origin position, zero heading, zero increment, no points.
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.heading_deg = 0.0;
        self.turn_deg = 0.0;
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_count_matches_point_count() {
        let mut walk = TurningWalk::new();
        for _ in 0..25 {
            walk.step(20.0, 10.0);
        }
        assert_eq!(walk.points().len(), 25);
    }

    #[test]
    fn every_displacement_has_step_length_magnitude() {
        let mut walk = TurningWalk::new();
        for _ in 0..50 {
            walk.step(7.5, 13.0);
        }

        let mut prev = Point::new(0.0, 0.0);
        for &p in walk.points() {
            let dx = p.x - prev.x;
            let dy = p.y - prev.y;
            assert_relative_eq!((dx * dx + dy * dy).sqrt(), 7.5, epsilon = 1e-9);
            prev = p;
        }
    }

    #[test]
    fn first_three_points_follow_triangular_heading_schedule() {
        let mut walk = TurningWalk::new();
        let p0 = walk.step(20.0, 10.0);
        let p1 = walk.step(20.0, 10.0);
        let p2 = walk.step(20.0, 10.0);

        assert_relative_eq!(p0.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-9);

        // Second point laid down at 10 degrees, third at 30.
        assert_relative_eq!(p1.x, 20.0 + 20.0 * 10.0_f64.to_radians().cos(), epsilon = 1e-9);
        assert_relative_eq!(p1.y, 20.0 * 10.0_f64.to_radians().sin(), epsilon = 1e-9);
        assert_relative_eq!(p2.x, p1.x + 20.0 * 30.0_f64.to_radians().cos(), epsilon = 1e-9);
        assert_relative_eq!(p2.y, p1.y + 20.0 * 30.0_f64.to_radians().sin(), epsilon = 1e-9);

        assert_relative_eq!(p1.x, 39.696, epsilon = 1e-3);
        assert_relative_eq!(p1.y, 3.473, epsilon = 1e-3);
        assert_relative_eq!(p2.x, 57.017, epsilon = 1e-3);
        assert_relative_eq!(p2.y, 13.473, epsilon = 1e-3);
    }

    #[test]
    fn negative_step_length_walks_backwards() {
        let mut walk = TurningWalk::new();
        let p = walk.step(-20.0, 0.0);
        assert_relative_eq!(p.x, -20.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut walk = TurningWalk::new();
        for _ in 0..10 {
            walk.step(20.0, 10.0);
        }
        walk.reset();

        assert!(walk.points().is_empty());
        assert_eq!(walk.heading_deg(), 0.0);

        // The next step after a reset matches the first step of a new walk.
        let replay = walk.step(20.0, 10.0);
        let fresh = TurningWalk::new().step(20.0, 10.0);
        assert_relative_eq!(replay.x, fresh.x, epsilon = 1e-12);
        assert_relative_eq!(replay.y, fresh.y, epsilon = 1e-12);
    }
}
