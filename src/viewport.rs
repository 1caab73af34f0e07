use crate::types::Point;

/// World-unit margin added to the extent span before fitting, so the curve
/// never touches the surface edge. Visual tuning value.
pub const FIT_MARGIN: f64 = 10.0;

/// Floor for the fit denominator; keeps the scale finite when the extent
/// is degenerate and the margin has been tuned to zero.
const MIN_SPAN: f64 = 1e-9;

/// Axis-aligned bounding box over every point seen since the last reset.
/// Only ever widens; `at_origin` is the degenerate post-reset box, so the
/// walk's starting position is always contained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn at_origin() -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }

    /// Folds a point into the box. Idempotent for contained points.
    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Larger of the two side lengths; the uniform-scale denominator.
    pub fn span(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::at_origin()
    }
}

/// Uniform world-to-surface transform, recomputed from the extent every
/// frame and never stored across frames. Output coordinates are relative
/// to the surface's visual center; the render adapter adds that offset.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl ViewTransform {
    pub fn fit(extent: Extent, surface_w: f64, surface_h: f64) -> Self {
        Self::fit_with_margin(extent, surface_w, surface_h, FIT_MARGIN)
    }

    pub fn fit_with_margin(extent: Extent, surface_w: f64, surface_h: f64, margin: f64) -> Self {
        let denom = (extent.span() + margin).max(MIN_SPAN);
        let (center_x, center_y) = extent.center();
        Self {
            scale: surface_w.max(surface_h) / denom,
            center_x,
            center_y,
        }
    }

    pub fn apply(&self, p: Point) -> (f64, f64) {
        (
            (p.x - self.center_x) * self.scale,
            (p.y - self.center_y) * self.scale,
        )
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
