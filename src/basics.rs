//! Foundation types, constants, and rounding helpers.
//!
//! Everything else in the crate depends on these: integer pixel points,
//! real-valued data points, rectangles, and the single rounding rule used
//! wherever a real coordinate becomes a pixel.

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer, ties away from zero.
///
/// `0.5 -> 1`, `1.5 -> 2`, `-0.5 -> -1`, `-2.5 -> -3`. This is the pixel
/// selection rule for every real-valued accumulator in the crate.
#[inline]
pub fn iround(v: f64) -> i32 {
    v.round() as i32
}

/// Truncate a double toward zero.
#[inline]
pub fn itrunc(v: f64) -> i32 {
    v as i32
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = 2.0 * PI;

/// Check if two values are equal within epsilon.
#[inline]
pub fn is_equal_eps(v1: f64, v2: f64, epsilon: f64) -> bool {
    (v1 - v2).abs() <= epsilon
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> From<(T, T)> for PointBase<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Pixel-space point.
pub type PointI = PointBase<i32>;
/// Data-space point (pre-normalization).
pub type PointD = PointBase<f64>;

impl PointI {
    /// Widen to a real-valued point.
    #[inline]
    pub fn to_f64(self) -> PointD {
        PointD::new(self.x as f64, self.y as f64)
    }
}

/// Ordered pixel coordinates produced by a rasterizer.
///
/// Order follows traversal from the algorithm's start to its end; for the
/// curve rasterizers it interleaves the symmetric copies of each step.
pub type PixelSequence = Vec<PointI>;

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Check if point (x, y) is inside the rectangle (inclusive).
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

pub type RectI = Rect<i32>;

// ============================================================================
// Tests
// ============================================================================
