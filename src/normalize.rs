//! Data-to-pixel normalization.
//!
//! Maps an arbitrary 2D dataset into the drawable box of a chart: the data
//! bounding box lands inside `[margin, width - margin]` horizontally and
//! `[margin, height - margin]` vertically, with y flipped so larger data
//! values sit higher on screen.

use crate::basics::{itrunc, PixelSequence, PointD, PointI};

// ============================================================================
// Bounds
// ============================================================================

/// Data-space bounding box of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Bounding box of `data`, or `None` when it is empty.
    pub fn of(data: &[PointD]) -> Option<Self> {
        let (first, rest) = data.split_first()?;
        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(rest.iter().fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        }))
    }

    /// Horizontal extent, clamped to 1 when all x values coincide.
    #[inline]
    pub fn x_range(&self) -> f64 {
        if self.x_max != self.x_min {
            self.x_max - self.x_min
        } else {
            1.0
        }
    }

    /// Vertical extent, clamped to 1 when all y values coincide.
    #[inline]
    pub fn y_range(&self) -> f64 {
        if self.y_max != self.y_min {
            self.y_max - self.y_min
        } else {
            1.0
        }
    }
}

// ============================================================================
// ChartFrame
// ============================================================================

/// Pixel-space chart area: a `width x height` surface with a uniform margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartFrame {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
}

impl ChartFrame {
    pub fn new(width: i32, height: i32, margin: i32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[inline]
    pub fn draw_width(&self) -> f64 {
        (self.width - 2 * self.margin) as f64
    }

    #[inline]
    pub fn draw_height(&self) -> f64 {
        (self.height - 2 * self.margin) as f64
    }

    /// Map one data point to pixel space (not yet truncated).
    pub fn map(&self, bounds: &Bounds, p: PointD) -> PointD {
        let m = self.margin as f64;
        PointD::new(
            m + (p.x - bounds.x_min) / bounds.x_range() * self.draw_width(),
            self.height as f64 - m - (p.y - bounds.y_min) / bounds.y_range() * self.draw_height(),
        )
    }

    /// X axis then Y axis, as `(from, to)` segments along the frame's
    /// bottom and left edges.
    pub fn axes(&self) -> [(PointD, PointD); 2] {
        let m = self.margin as f64;
        let w = self.width as f64;
        let h = self.height as f64;
        [
            (PointD::new(m, h - m), PointD::new(w - m, h - m)),
            (PointD::new(m, m), PointD::new(m, h - m)),
        ]
    }

    /// Grid segments: `divisions + 1` vertical lines left to right, then
    /// `divisions + 1` horizontal lines top to bottom.
    pub fn grid_lines(&self, divisions: u32) -> Vec<(PointD, PointD)> {
        let m = self.margin as f64;
        let w = self.width as f64;
        let h = self.height as f64;
        let n = divisions.max(1) as f64;
        let step_x = self.draw_width() / n;
        let step_y = self.draw_height() / n;

        let vertical = (0..=divisions).map(|i| {
            let x = m + step_x * i as f64;
            (PointD::new(x, m), PointD::new(x, h - m))
        });
        let horizontal = (0..=divisions).map(|i| {
            let y = m + step_y * i as f64;
            (PointD::new(m, y), PointD::new(w - m, y))
        });
        vertical.chain(horizontal).collect()
    }
}

// ============================================================================
// normalize
// ============================================================================

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalized {
    /// One pixel per data point, in dataset order.
    pub points: PixelSequence,
    /// Data bounds used for the mapping; `None` for an empty dataset.
    pub bounds: Option<Bounds>,
}

/// Map `data` into a `width x height` pixel area inset by `margin`.
///
/// `pixel_x = margin + (x - x_min) / x_range * (width - 2·margin)` and
/// `pixel_y = height - margin - (y - y_min) / y_range * (height - 2·margin)`,
/// truncated toward zero. A degenerate axis (all values equal) uses a range
/// of 1, so every point sits on the frame's left or bottom edge.
pub fn normalize(data: &[PointD], width: i32, height: i32, margin: i32) -> Normalized {
    let Some(bounds) = Bounds::of(data) else {
        return Normalized::default();
    };
    let frame = ChartFrame::new(width, height, margin);

    let points = data
        .iter()
        .map(|&p| {
            let m = frame.map(&bounds, p);
            PointI::new(itrunc(m.x), itrunc(m.y))
        })
        .collect::<PixelSequence>();

    tracing::debug!(
        count = points.len(),
        x_min = bounds.x_min,
        x_max = bounds.x_max,
        y_min = bounds.y_min,
        y_max = bounds.y_max,
        "normalized dataset"
    );

    Normalized {
        points,
        bounds: Some(bounds),
    }
}

// ============================================================================
// Tests
// ============================================================================
