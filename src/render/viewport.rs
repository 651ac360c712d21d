use crate::data::model::Bounds;

use super::style::DATA_MARGIN;

// ---------------------------------------------------------------------------
// PlotArea – pixel rectangle of the axes box
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

// ---------------------------------------------------------------------------
// Viewport – data limits mapped onto the plot area
// ---------------------------------------------------------------------------

/// Data-space limits and the pixel rectangle they are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub area: PlotArea,
}

impl Viewport {
    /// Fit the data with equal aspect: one unit covers the same number of
    /// pixels on both axes. The axis with spare room gets its limits widened
    /// about their centre.
    pub fn fit_equal(bounds: Option<Bounds>, area: PlotArea) -> Self {
        let (x, y) = match bounds {
            Some(b) => (
                Axis::from_limits(b.min_x, b.max_x).nonsingular().padded(),
                Axis::from_limits(b.min_y, b.max_y).nonsingular().padded(),
            ),
            None => (Axis::from_limits(0.0, 1.0), Axis::from_limits(0.0, 1.0)),
        };

        let (half_w, half_h) = (area.width as f64 / 2.0, area.height as f64 / 2.0);
        let px_per_unit = (half_w / x.half).min(half_h / y.half);

        Viewport {
            x_range: x.with_half(half_w / px_per_unit).limits(),
            y_range: y.with_half(half_h / px_per_unit).limits(),
            area,
        }
    }

    /// Pixels per data unit along x.
    pub fn x_scale(&self) -> f64 {
        self.area.width as f64 / 2.0 / half_width(self.x_range)
    }

    /// Pixels per data unit along y.
    pub fn y_scale(&self) -> f64 {
        self.area.height as f64 / 2.0 / half_width(self.y_range)
    }

    /// Data → pixel. The y axis points up in data space and down in pixels.
    pub fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let (area, centre_x, centre_y) = (self.area, centre(self.x_range), centre(self.y_range));
        // Halved offsets: `x - centre` alone can overflow for far-apart values.
        let dx = (x / 2.0 - centre_x / 2.0) * (2.0 * self.x_scale());
        let dy = (y / 2.0 - centre_y / 2.0) * (2.0 * self.y_scale());
        let px = (area.left + area.width / 2.0) as f64 + dx;
        let py = (area.top + area.height / 2.0) as f64 - dy;
        (px as f32, py as f32)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_range.0..=self.x_range.1).contains(&x)
            && (self.y_range.0..=self.y_range.1).contains(&y)
    }
}

fn centre((lo, hi): (f64, f64)) -> f64 {
    lo / 2.0 + hi / 2.0
}

fn half_width((lo, hi): (f64, f64)) -> f64 {
    hi / 2.0 - lo / 2.0
}

/// One axis as centre and half-width, so spans up to `2 * f64::MAX` stay
/// representable.
#[derive(Debug, Clone, Copy)]
struct Axis {
    mid: f64,
    half: f64,
}

impl Axis {
    fn from_limits(lo: f64, hi: f64) -> Self {
        Axis {
            mid: centre((lo, hi)),
            half: half_width((lo, hi)),
        }
    }

    /// A zero-width axis is widened around its value.
    fn nonsingular(self) -> Self {
        if self.half > f64::EPSILON * self.mid.abs().max(1.0) {
            self
        } else {
            self.with_half(0.5f64.max(self.mid.abs() * DATA_MARGIN))
        }
    }

    fn padded(self) -> Self {
        self.with_half(self.half * (1.0 + 2.0 * DATA_MARGIN))
    }

    /// Limits never leave the finite range: an axis pressed against
    /// `±f64::MAX` has its centre moved inwards.
    fn with_half(self, half: f64) -> Self {
        let half = half.min(f64::MAX);
        let room = f64::MAX - half;
        Axis {
            mid: self.mid.clamp(-room, room),
            half,
        }
    }

    fn limits(self) -> (f64, f64) {
        (self.mid - self.half, self.mid + self.half)
    }
}

// ---------------------------------------------------------------------------
// Tick placement
// ---------------------------------------------------------------------------

/// Tick positions at a 1/2/5 × 10^k step, at most roughly `max_ticks` of them.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || max_ticks == 0 {
        return Vec::new();
    }

    let raw = span / max_ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * mag);

    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !first.is_finite() || !last.is_finite() || last - first > 4.0 * max_ticks as f64 {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}
