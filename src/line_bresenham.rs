//! Bresenham line rasterization.
//!
//! Integer-only decision-parameter walk: the axis with the larger delta
//! drives and advances every step, the other advances only when the
//! decision parameter is non-negative. No rounding error accumulates.

use crate::basics::{PixelSequence, PointI};

// ============================================================================
// LineBresenham
// ============================================================================

/// Bresenham line walker.
///
/// Emits exactly one pixel per unit step along the driving axis, starting at
/// `(x1, y1)` and ending at `(x2, y2)`. When `|dx| == |dy|` the y axis is
/// treated as the driving axis.
#[derive(Debug, Clone)]
pub struct LineBresenham {
    x: i32,
    y: i32,
    x_step: i32,
    y_step: i32,
    // Positive increment when the minor axis does not step.
    inc_straight: i64,
    // Increment (<= 0) when the minor axis steps too.
    inc_diagonal: i64,
    p: i64,
    x_major: bool,
    remaining: u64,
}

impl LineBresenham {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = (x2 as i64 - x1 as i64).abs();
        let dy = (y2 as i64 - y1 as i64).abs();

        // A zero delta falls through to -1; it is never applied.
        let x_step = if x2 > x1 { 1 } else { -1 };
        let y_step = if y2 > y1 { 1 } else { -1 };

        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        Self {
            x: x1,
            y: y1,
            x_step,
            y_step,
            inc_straight: 2 * minor,
            inc_diagonal: 2 * (minor - major),
            p: 2 * minor - major,
            x_major,
            remaining: major as u64 + 1,
        }
    }

    /// True if x is the driving axis (`|dx| > |dy|`).
    #[inline]
    pub fn is_x_major(&self) -> bool {
        self.x_major
    }

    /// Current decision parameter.
    #[inline]
    pub fn decision(&self) -> i64 {
        self.p
    }

    #[inline]
    fn step(&mut self) {
        let minor_steps = self.p >= 0;
        if minor_steps {
            self.p += self.inc_diagonal;
        } else {
            self.p += self.inc_straight;
        }
        if self.x_major {
            if minor_steps {
                self.y += self.y_step;
            }
            self.x += self.x_step;
        } else {
            if minor_steps {
                self.x += self.x_step;
            }
            self.y += self.y_step;
        }
    }
}

impl Iterator for LineBresenham {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = PointI::new(self.x, self.y);
        if self.remaining > 0 {
            self.step();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineBresenham {}

/// Rasterize the segment `(x1, y1) -> (x2, y2)` with Bresenham's algorithm.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
    LineBresenham::new(x1, y1, x2, y2).collect()
}

// ============================================================================
// Tests
// ============================================================================
