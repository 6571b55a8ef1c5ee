//! Pie-chart sector partitioning.
//!
//! Splits the full circle into consecutive sectors proportional to a list of
//! magnitudes, starting at 12 o'clock (−π/2) and sweeping toward increasing
//! angles. Labels and colors ride along untouched for the renderer.

use crate::basics::{PointD, PI, TAU};
use crate::error::DomainError;

/// Angle of the first sector's leading edge (12 o'clock).
pub const START_ANGLE: f64 = -PI / 2.0;

/// Fraction of the radius at which sector labels are anchored.
pub const LABEL_RADIUS_FACTOR: f64 = 0.6;

/// Minimum number of arc subdivisions per sector.
pub const MIN_ARC_SEGMENTS: u32 = 2;

// ============================================================================
// Sector
// ============================================================================

/// One slice of a partitioned circle. Angles are in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector<L, C> {
    pub value: f64,
    /// `value / total * 100`.
    pub percentage: f64,
    pub label: L,
    pub color: C,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

impl<L, C> Sector<L, C> {
    /// Angular extent `end_angle - start_angle`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Number of straight segments used to approximate this sector's arc when
    /// a full circle uses `segments`.
    pub fn arc_segments(&self, segments: u32) -> u32 {
        let n = (segments as f64 * (self.span() / TAU)) as u32;
        n.max(MIN_ARC_SEGMENTS)
    }

    /// Triangle-fan vertices: the center, then `arc_segments + 1` points
    /// along the arc from `start_angle` to `end_angle`.
    pub fn arc_vertices(&self, cx: f64, cy: f64, radius: f64, segments: u32) -> Vec<PointD> {
        let n = self.arc_segments(segments);
        let span = self.span();
        let mut out = Vec::with_capacity(n as usize + 2);
        out.push(PointD::new(cx, cy));
        out.extend((0..=n).map(|i| {
            let a = self.start_angle + span * i as f64 / n as f64;
            PointD::new(cx + radius * a.cos(), cy + radius * a.sin())
        }));
        out
    }

    /// Where the sector's label goes: along the mid angle at
    /// [`LABEL_RADIUS_FACTOR`] of the radius.
    pub fn label_anchor(&self, cx: f64, cy: f64, radius: f64) -> PointD {
        let r = radius * LABEL_RADIUS_FACTOR;
        PointD::new(cx + r * self.mid_angle.cos(), cy + r * self.mid_angle.sin())
    }
}

// ============================================================================
// partition_sectors
// ============================================================================

/// Partition the circle proportionally to `magnitudes`.
///
/// `labels` and `colors` must yield exactly one item per magnitude. Output
/// order matches input order; the spans tile `[START_ANGLE, START_ANGLE + 2π]`
/// without gaps or overlap.
///
/// # Errors
///
/// [`DomainError`] if a magnitude is negative or not finite, if the label or
/// color count differs from the magnitude count, or if the total is not
/// positive (empty or all-zero input) or overflows to infinity.
pub fn partition_sectors<L, C>(
    magnitudes: &[f64],
    labels: impl IntoIterator<Item = L>,
    colors: impl IntoIterator<Item = C>,
) -> Result<Vec<Sector<L, C>>, DomainError> {
    if let Some((index, &value)) = magnitudes
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        tracing::warn!(index, value, "rejecting sector magnitude");
        return Err(DomainError::InvalidMagnitude { index, value });
    }

    let labels: Vec<L> = labels.into_iter().collect();
    let colors: Vec<C> = colors.into_iter().collect();
    for (what, actual) in [("labels", labels.len()), ("colors", colors.len())] {
        if actual != magnitudes.len() {
            tracing::warn!(
                what,
                expected = magnitudes.len(),
                actual,
                "sector input length mismatch"
            );
            return Err(DomainError::LengthMismatch {
                what,
                expected: magnitudes.len(),
                actual,
            });
        }
    }

    let total: f64 = magnitudes.iter().sum();
    if !total.is_finite() {
        tracing::warn!(total, "sector magnitudes overflow their sum");
        return Err(DomainError::NonFiniteTotal(total));
    }
    if total <= 0.0 {
        tracing::warn!(total, "cannot partition a non-positive total");
        return Err(DomainError::NonPositiveTotal(total));
    }
    tracing::debug!(total, count = magnitudes.len(), "partitioning sectors");

    let mut angle = START_ANGLE;
    let sectors = magnitudes
        .iter()
        .zip(labels)
        .zip(colors)
        .map(|((&value, label), color)| {
            let fraction = value / total;
            let span = fraction * TAU;
            let sector = Sector {
                value,
                percentage: fraction * 100.0,
                label,
                color,
                start_angle: angle,
                end_angle: angle + span,
                mid_angle: angle + span / 2.0,
            };
            angle += span;
            sector
        })
        .collect();

    Ok(sectors)
}

/// `segments` points evenly spaced around a full circle, starting at angle 0.
pub fn circle_outline(cx: f64, cy: f64, radius: f64, segments: u32) -> Vec<PointD> {
    (0..segments)
        .map(|i| {
            let a = TAU * i as f64 / segments as f64;
            PointD::new(cx + radius * a.cos(), cy + radius * a.sin())
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::is_equal_eps;

    const DATA: [f64; 5] = [30.0, 45.0, 15.0, 60.0, 25.0];
    const LABELS: [&str; 5] = ["Product A", "Product B", "Product C", "Product D", "Product E"];

    fn sample() -> Vec<Sector<&'static str, ()>> {
        partition_sectors(&DATA, LABELS, [(); 5]).unwrap()
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let sectors = sample();
        let sum: f64 = sectors.iter().map(|s| s.percentage).sum();
        assert!(is_equal_eps(sum, 100.0, 1e-9));
        // 45 / 175
        assert!(is_equal_eps(sectors[1].percentage, 25.714285714285715, 1e-9));
    }

    #[test]
    fn test_closed_cover() {
        let sectors = sample();
        assert_eq!(sectors[0].start_angle, START_ANGLE);
        for w in sectors.windows(2) {
            assert_eq!(w[0].end_angle, w[1].start_angle);
        }
        let last = sectors.last().unwrap();
        assert!(is_equal_eps(last.end_angle, START_ANGLE + TAU, 1e-6));
    }

    #[test]
    fn test_mid_angle_and_order() {
        let sectors = sample();
        for (s, label) in sectors.iter().zip(LABELS) {
            assert_eq!(s.label, label);
            assert!(is_equal_eps(s.mid_angle, (s.start_angle + s.end_angle) / 2.0, 1e-12));
        }
    }

    #[test]
    fn test_zero_magnitude_has_empty_span() {
        let sectors = partition_sectors(&[1.0, 0.0, 1.0], ["a", "b", "c"], [1, 2, 3]).unwrap();
        assert_eq!(sectors[1].span(), 0.0);
        assert_eq!(sectors[1].percentage, 0.0);
        assert_eq!(sectors[2].color, 3);
    }

    #[test]
    fn test_empty_and_zero_total_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            partition_sectors(&[], empty, [(); 0]),
            Err(DomainError::NonPositiveTotal(0.0))
        );
        assert_eq!(
            partition_sectors(&[0.0, 0.0], ["a", "b"], [(), ()]),
            Err(DomainError::NonPositiveTotal(0.0))
        );
    }

    #[test]
    fn test_overflowing_total_rejected() {
        assert_eq!(
            partition_sectors(&[f64::MAX, f64::MAX], ["a", "b"], [(), ()]),
            Err(DomainError::NonFiniteTotal(f64::INFINITY))
        );
        // a single f64::MAX still partitions
        let sectors = partition_sectors(&[f64::MAX], ["a"], [()]).unwrap();
        assert_eq!(sectors[0].percentage, 100.0);
    }

    #[test]
    fn test_invalid_magnitude_rejected() {
        assert_eq!(
            partition_sectors(&[1.0, -2.0], ["a", "b"], [(), ()]),
            Err(DomainError::InvalidMagnitude {
                index: 1,
                value: -2.0
            })
        );
        assert!(matches!(
            partition_sectors(&[f64::NAN], ["a"], [()]),
            Err(DomainError::InvalidMagnitude { index: 0, .. })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert_eq!(
            partition_sectors(&[1.0, 2.0], ["a"], [(), ()]),
            Err(DomainError::LengthMismatch {
                what: "labels",
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            partition_sectors(&[1.0, 2.0], ["a", "b"], [()]),
            Err(DomainError::LengthMismatch {
                what: "colors",
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_arc_vertices() {
        let sectors = partition_sectors(&[1.0, 3.0], ["q", "rest"], [(), ()]).unwrap();
        let quarter = &sectors[0];
        assert_eq!(quarter.arc_segments(100), 25);
        let fan = quarter.arc_vertices(0.0, 0.0, 10.0, 100);
        assert_eq!(fan.len(), 27);
        assert_eq!(fan[0], PointD::new(0.0, 0.0));
        // starts at 12 o'clock, ends at 3 o'clock
        assert!(is_equal_eps(fan[1].x, 0.0, 1e-9) && is_equal_eps(fan[1].y, -10.0, 1e-9));
        assert!(is_equal_eps(fan[26].x, 10.0, 1e-9) && is_equal_eps(fan[26].y, 0.0, 1e-9));
    }

    #[test]
    fn test_tiny_sector_uses_minimum_segments() {
        let sectors = partition_sectors(&[1.0, 999.0], ["tiny", "rest"], [(), ()]).unwrap();
        assert_eq!(sectors[0].arc_segments(100), MIN_ARC_SEGMENTS);
    }

    #[test]
    fn test_label_anchor() {
        let sectors = partition_sectors(&[1.0, 1.0], ["right", "left"], [(), ()]).unwrap();
        // first half sweeps -90..90 degrees, so its mid angle points at 3 o'clock
        let p = sectors[0].label_anchor(100.0, 100.0, 50.0);
        assert!(is_equal_eps(p.x, 130.0, 1e-9));
        assert!(is_equal_eps(p.y, 100.0, 1e-9));
    }

    #[test]
    fn test_circle_outline() {
        let pts = circle_outline(5.0, 5.0, 2.0, 4);
        assert_eq!(pts.len(), 4);
        assert!(is_equal_eps(pts[0].x, 7.0, 1e-12));
        assert!(is_equal_eps(pts[1].y, 7.0, 1e-12));
        assert!(circle_outline(0.0, 0.0, 1.0, 0).is_empty());
    }
}
