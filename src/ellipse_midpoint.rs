//! Midpoint ellipse rasterization.
//!
//! Two-region midpoint algorithm over the first quadrant, mirrored across
//! both axes. Region 1 covers the part of the boundary where the slope
//! magnitude is below 1 and x drives; region 2 covers the rest and y
//! drives. The region 2 decision parameter is re-initialized from the
//! position where the regions meet, never carried over from region 1.
//!
//! Decision parameters are kept as `i128` scaled by 4, which makes the
//! `rx²/4` and `(x + 1/2)²` terms exact without changing any sign test.
//! The `rx²·ry²` products need the extra width for any radius whose
//! boundary still fits in `i32` coordinates.

use crate::basics::{PixelSequence, PointI, RectI};

// ============================================================================
// EllipseRegion
// ============================================================================

/// Which half of the quadrant the interpolator is walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EllipseRegion {
    /// `2·ry²·x < 2·rx²·y`: x advances every step.
    One,
    /// y retreats every step until it drops below zero.
    Two,
    Done,
}

// ============================================================================
// EllipseMidpointInterpolator
// ============================================================================

/// Midpoint ellipse interpolator.
///
/// Yields the first-quadrant offsets `(x, y)` from `(0, ry)` to `(~rx, 0)`.
/// The caller mirrors them into the other three quadrants.
#[derive(Debug, Clone)]
pub struct EllipseMidpointInterpolator {
    rx2: i128,
    ry2: i128,
    x: i128,
    y: i128,
    // Tangent slope terms: dx = 2·ry²·x, dy = 2·rx²·y.
    dx: i128,
    dy: i128,
    // Decision parameter, scaled by 4.
    p: i128,
    region: EllipseRegion,
}

impl EllipseMidpointInterpolator {
    pub fn new(rx: u32, ry: u32) -> Self {
        let rx2 = i128::from(rx) * i128::from(rx);
        let ry2 = i128::from(ry) * i128::from(ry);
        let y = i128::from(ry);
        Self {
            rx2,
            ry2,
            x: 0,
            y,
            dx: 0,
            dy: 2 * rx2 * y,
            // 4 · (ry² − rx²·ry + rx²/4)
            p: 4 * ry2 - 4 * rx2 * y + rx2,
            region: EllipseRegion::One,
        }
    }

    #[inline]
    pub fn region(&self) -> EllipseRegion {
        self.region
    }

    /// Current decision parameter, scaled by 4.
    #[inline]
    pub fn decision(&self) -> i128 {
        self.p
    }

    fn enter_region_two(&mut self) {
        // 4 · (ry²·(x + 1/2)² + rx²·(y − 1)² − rx²·ry²)
        let two_x_1 = 2 * self.x + 1;
        let y_1 = self.y - 1;
        self.p = self.ry2 * two_x_1 * two_x_1 - 4 * self.rx2 * self.ry2
            + 4 * self.rx2 * y_1 * y_1;
        self.region = EllipseRegion::Two;
    }

    fn step_region_one(&mut self) {
        self.x += 1;
        self.dx += 2 * self.ry2;
        if self.p < 0 {
            self.p += 4 * (self.dx + self.ry2);
        } else {
            self.y -= 1;
            self.dy -= 2 * self.rx2;
            self.p += 4 * (self.dx - self.dy + self.ry2);
        }
    }

    fn step_region_two(&mut self) {
        self.y -= 1;
        self.dy -= 2 * self.rx2;
        if self.p > 0 {
            self.p += 4 * (self.rx2 - self.dy);
        } else {
            self.x += 1;
            self.dx += 2 * self.ry2;
            self.p += 4 * (self.dx - self.dy + self.rx2);
        }
    }
}

impl Iterator for EllipseMidpointInterpolator {
    type Item = PointI;

    fn next(&mut self) -> Option<PointI> {
        loop {
            match self.region {
                EllipseRegion::One => {
                    if self.dx < self.dy {
                        let cur = PointI::new(self.x as i32, self.y as i32);
                        self.step_region_one();
                        return Some(cur);
                    }
                    self.enter_region_two();
                }
                EllipseRegion::Two => {
                    if self.y >= 0 {
                        let cur = PointI::new(self.x as i32, self.y as i32);
                        self.step_region_two();
                        return Some(cur);
                    }
                    self.region = EllipseRegion::Done;
                }
                EllipseRegion::Done => return None,
            }
        }
    }
}

/// The four reflections of quadrant offset `(x, y)` around `(cx, cy)`.
///
/// Order: `(+x,+y) (-x,+y) (-x,-y) (+x,-y)`.
#[inline]
pub fn ellipse_symmetry_points(cx: i32, cy: i32, x: i32, y: i32) -> [PointI; 4] {
    [
        PointI::new(cx + x, cy + y),
        PointI::new(cx - x, cy + y),
        PointI::new(cx - x, cy - y),
        PointI::new(cx + x, cy - y),
    ]
}

/// Rasterize the ellipse boundary with radii `(rx, ry)` around `(cx, cy)`.
///
/// Every quadrant step contributes 4 points, without deduplication. A flat
/// ellipse (`ry == 0`) is the horizontal span `cx - rx ..= cx + rx`, emitted
/// with the same 4-way symmetry; the recurrence alone would collapse it to
/// the center.
pub fn rasterize_ellipse(cx: i32, cy: i32, rx: u32, ry: u32) -> PixelSequence {
    let mut points = Vec::new();

    if ry == 0 {
        for x in 0..=rx as i32 {
            points.extend(ellipse_symmetry_points(cx, cy, x, 0));
        }
    } else {
        for q in EllipseMidpointInterpolator::new(rx, ry) {
            points.extend(ellipse_symmetry_points(cx, cy, q.x, q.y));
        }
    }

    tracing::trace!(cx, cy, rx, ry, count = points.len(), "rasterized ellipse");
    points
}

/// Axis-aligned bounding rectangle of an ellipse.
pub fn ellipse_bounding_rect(cx: i32, cy: i32, rx: u32, ry: u32) -> RectI {
    RectI::new(
        cx - rx as i32,
        cy - ry as i32,
        cx + rx as i32,
        cy + ry as i32,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrant(rx: u32, ry: u32) -> Vec<(i32, i32)> {
        EllipseMidpointInterpolator::new(rx, ry)
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_wide_reference_trace() {
        // rx=4, ry=2: region 1 covers (0,2)..(3,1), region 2 starts at (4,0)
        assert_eq!(quadrant(4, 2), vec![(0, 2), (1, 2), (2, 2), (3, 1), (4, 0)]);
    }

    #[test]
    fn test_tall_reference_trace() {
        // rx=2, ry=4: region 1 ends after one point; region 2 starts with p2 = -12
        assert_eq!(quadrant(2, 4), vec![(0, 4), (1, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_region_two_reinitialized() {
        let mut ei = EllipseMidpointInterpolator::new(2, 4);
        assert_eq!(ei.region(), EllipseRegion::One);
        // 4 · (16 − 4·4 + 1)
        assert_eq!(ei.decision(), 4);
        ei.next();
        ei.next();
        assert_eq!(ei.region(), EllipseRegion::Two);
        // p2 at (1, 3) is −12, stepped once to 40 (both scaled by 4)
        assert_eq!(ei.decision(), 4 * 40);
    }

    #[test]
    fn test_initial_decision_scaled() {
        let ei = EllipseMidpointInterpolator::new(4, 2);
        assert_eq!(ei.decision(), 4 * -24);
    }

    #[test]
    fn test_emission_order() {
        let pts = rasterize_ellipse(100, 50, 4, 2);
        assert_eq!(pts.len(), 20);
        assert_eq!(&pts[..4], &ellipse_symmetry_points(100, 50, 0, 2)[..]);
        assert_eq!(
            &pts[16..],
            &[
                PointI::new(104, 50),
                PointI::new(96, 50),
                PointI::new(96, 50),
                PointI::new(104, 50),
            ]
        );
    }

    #[test]
    fn test_zero_radii() {
        let pts = rasterize_ellipse(7, 8, 0, 0);
        assert_eq!(pts.len(), 4);
        assert!(pts.iter().all(|&p| p == PointI::new(7, 8)));
    }

    #[test]
    fn test_flat_ellipse_is_horizontal_span() {
        let pts = rasterize_ellipse(0, 0, 3, 0);
        assert_eq!(pts.len(), 16);
        assert!(pts.iter().all(|p| p.y == 0 && p.x.abs() <= 3));
        assert!(pts.contains(&PointI::new(-3, 0)));
        assert!(pts.contains(&PointI::new(3, 0)));
    }

    #[test]
    fn test_large_radii() {
        let mut ei = EllipseMidpointInterpolator::new(40_000, 40_000);
        assert_eq!(ei.next(), Some(PointI::new(0, 40_000)));
        assert_eq!(ei.last(), Some(PointI::new(40_000, 0)));

        let pts = rasterize_ellipse(0, 0, 100_000, 20_000);
        assert_eq!(&pts[..4], &ellipse_symmetry_points(0, 0, 0, 20_000)[..]);
        assert_eq!(pts.len() % 4, 0);
        assert!(pts.contains(&PointI::new(100_000, 0)));
        assert!(pts.contains(&PointI::new(-100_000, 0)));
    }

    #[test]
    fn test_thin_vertical_ellipse() {
        assert_eq!(quadrant(0, 3), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_bounding_rect() {
        let r = ellipse_bounding_rect(250, 200, 150, 100);
        assert_eq!(r, RectI::new(100, 100, 400, 300));
        for p in rasterize_ellipse(250, 200, 150, 100) {
            assert!(r.hit_test(p.x, p.y), "{p:?}");
        }
    }
}
