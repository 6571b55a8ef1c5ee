//! DDA (Digital Differential Analyzer) line rasterization.
//!
//! Walks the longer axis in unit steps and the shorter one in fractional
//! steps, accumulating a real-valued position and rounding it to a pixel at
//! every emission.

use crate::basics::{iround, PixelSequence, PointI};

// ============================================================================
// DdaLine
// ============================================================================

/// Real-valued DDA line walker.
///
/// Yields `max(|dx|, |dy|) + 1` pixels from `(x1, y1)` to `(x2, y2)`. The
/// running position accumulates `x_inc`/`y_inc` on every step and each
/// emission rounds it with [`iround`] (ties away from zero).
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u64,
}

impl DdaLine {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = x2 as f64 - x1 as f64;
        let dy = y2 as f64 - y1 as f64;
        let steps = Self::steps(x1, y1, x2, y2);

        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx / steps as f64, dy / steps as f64)
        };

        Self {
            x: x1 as f64,
            y: y1 as f64,
            x_inc,
            y_inc,
            remaining: steps + 1,
        }
    }

    /// Number of unit steps along the longer axis.
    #[inline]
    pub fn steps(x1: i32, y1: i32, x2: i32, y2: i32) -> u64 {
        let dx = (x2 as i64 - x1 as i64).unsigned_abs();
        let dy = (y2 as i64 - y1 as i64).unsigned_abs();
        dx.max(dy)
    }

    /// Per-step increments `(x_inc, y_inc)`.
    #[inline]
    pub fn increments(&self) -> (f64, f64) {
        (self.x_inc, self.y_inc)
    }
}

impl Iterator for DdaLine {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = PointI::new(iround(self.x), iround(self.y));
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLine {}

/// Rasterize the segment `(x1, y1) -> (x2, y2)` with the DDA algorithm.
///
/// A zero-length segment yields the single point `(x1, y1)`.
pub fn dda_line(x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
    DdaLine::new(x1, y1, x2, y2).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> PixelSequence {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(dda_line(5, 5, 5, 5), pts(&[(5, 5)]));
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(
            dda_line(0, 0, 4, 0),
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])
        );
    }

    #[test]
    fn test_vertical_reversed() {
        assert_eq!(dda_line(2, 3, 2, 0), pts(&[(2, 3), (2, 2), (2, 1), (2, 0)]));
    }

    #[test]
    fn test_tie_rounds_away_from_zero() {
        // y advances by 0.5 per step: 0.0, 0.5, 1.0 -> 0, 1, 1
        assert_eq!(dda_line(0, 0, 2, 1), pts(&[(0, 0), (1, 1), (2, 1)]));
        // negative direction: 0.0, -0.5, -1.0 -> 0, -1, -1
        assert_eq!(dda_line(0, 0, 2, -1), pts(&[(0, 0), (1, -1), (2, -1)]));
    }

    #[test]
    fn test_gentle_slope() {
        // y increments 1/3: 0, .33, .67, 1.0
        assert_eq!(
            dda_line(0, 0, 3, 1),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1)])
        );
    }

    #[test]
    fn test_steep_negative_slope() {
        let line = dda_line(150, 500, 650, 100);
        assert_eq!(line.len(), 501);
        assert_eq!(line[0], PointI::new(150, 500));
        assert_eq!(*line.last().unwrap(), PointI::new(650, 100));
    }

    #[test]
    fn test_increments() {
        let dda = DdaLine::new(0, 0, 10, 5);
        assert_eq!(dda.increments(), (1.0, 0.5));
        assert_eq!(dda.len(), 11);
    }

    #[test]
    fn test_steps() {
        assert_eq!(DdaLine::steps(0, 0, -7, 3), 7);
        assert_eq!(DdaLine::steps(0, 0, 0, 0), 0);
    }
}
