//! Midpoint circle rasterization.
//!
//! Steps through the octant `0 <= x <= y` with an integer decision parameter
//! and mirrors every step into the other seven octants.

use crate::basics::{PixelSequence, PointI};

// ============================================================================
// CircleMidpointInterpolator
// ============================================================================

/// Midpoint circle interpolator over the second octant.
///
/// Starts at `(0, r)` with `p = 1 - r`. Each [`next`](Self::next) advances
/// x by one and retreats y when the midpoint between the two candidate
/// pixels falls outside the circle. The caller mirrors `(x, y)`.
#[derive(Debug, Clone)]
pub struct CircleMidpointInterpolator {
    x: i32,
    y: i32,
    p: i64,
}

impl CircleMidpointInterpolator {
    /// `r` must not exceed `i32::MAX`.
    pub fn new(r: u32) -> Self {
        Self {
            x: 0,
            y: r as i32,
            p: 1 - r as i64,
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Current decision parameter.
    #[inline]
    pub fn decision(&self) -> i64 {
        self.p
    }

    /// True once the octant boundary `x >= y` has been reached.
    #[inline]
    pub fn done(&self) -> bool {
        self.x >= self.y
    }

    /// Advance to the next pixel of the octant.
    pub fn next(&mut self) {
        self.x += 1;
        if self.p < 0 {
            self.p += 2 * self.x as i64 + 1;
        } else {
            self.y -= 1;
            self.p += 2 * (self.x as i64 - self.y as i64) + 1;
        }
    }
}

/// The eight reflections of octant offset `(x, y)` around `(cx, cy)`.
///
/// Order: `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
#[inline]
pub fn circle_symmetry_points(cx: i32, cy: i32, x: i32, y: i32) -> [PointI; 8] {
    [
        PointI::new(cx + x, cy + y),
        PointI::new(cx - x, cy + y),
        PointI::new(cx + x, cy - y),
        PointI::new(cx - x, cy - y),
        PointI::new(cx + y, cy + x),
        PointI::new(cx - y, cy + x),
        PointI::new(cx + y, cy - x),
        PointI::new(cx - y, cy - x),
    ]
}

/// Rasterize the circle boundary of radius `r` around `(cx, cy)`.
///
/// Every octant step contributes 8 points, including the starting step
/// and the step that reaches `x >= y`. Points are not deduplicated: the
/// `x == 0` and `x == y` steps repeat pixels, and `r == 0` yields the center
/// 8 times.
pub fn rasterize_circle(cx: i32, cy: i32, r: u32) -> PixelSequence {
    let mut ci = CircleMidpointInterpolator::new(r);
    let mut points = Vec::with_capacity(8 * (r as usize / 4 * 3 + 2));

    points.extend(circle_symmetry_points(cx, cy, ci.x(), ci.y()));
    while !ci.done() {
        ci.next();
        points.extend(circle_symmetry_points(cx, cy, ci.x(), ci.y()));
    }

    tracing::trace!(cx, cy, r, count = points.len(), "rasterized circle");
    points
}

// ============================================================================
// Tests
// ============================================================================
