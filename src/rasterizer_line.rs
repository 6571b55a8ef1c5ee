//! Line rasterizer selection.
//!
//! [`LineAlgorithm`] names the two line algorithms; [`LineRasterizer`] is the
//! strategy seam both implement, so chart builders can be generic over the
//! algorithm or pick one at runtime.

use crate::basics::{PixelSequence, PointI};
use crate::dda_line::dda_line;
use crate::line_bresenham::bresenham_line;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

// ============================================================================
// LineRasterizer
// ============================================================================

/// A line scan-conversion strategy.
pub trait LineRasterizer {
    /// Rasterize `(x1, y1) -> (x2, y2)` into an ordered pixel sequence that
    /// starts at the first endpoint and ends at the second.
    fn rasterize(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence;

    /// Rasterize between two points.
    fn rasterize_points(&self, a: PointI, b: PointI) -> PixelSequence {
        self.rasterize(a.x, a.y, b.x, b.y)
    }
}

/// Real-valued DDA with round-half-away-from-zero pixel selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dda;

/// Integer Bresenham.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bresenham;

impl LineRasterizer for Dda {
    fn rasterize(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
        dda_line(x1, y1, x2, y2)
    }
}

impl LineRasterizer for Bresenham {
    fn rasterize(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
        bresenham_line(x1, y1, x2, y2)
    }
}

// ============================================================================
// LineAlgorithm
// ============================================================================

/// Line algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum LineAlgorithm {
    Dda,
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            LineAlgorithm::Dda => "dda",
            LineAlgorithm::Bresenham => "bresenham",
        }
    }
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LineAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dda" => Ok(LineAlgorithm::Dda),
            "bresenham" => Ok(LineAlgorithm::Bresenham),
            other => Err(format!("unknown line algorithm '{other}'")),
        }
    }
}

impl LineRasterizer for LineAlgorithm {
    fn rasterize(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> PixelSequence {
        match self {
            LineAlgorithm::Dda => Dda.rasterize(x1, y1, x2, y2),
            LineAlgorithm::Bresenham => Bresenham.rasterize(x1, y1, x2, y2),
        }
    }
}

/// Rasterize a line segment with the chosen algorithm.
pub fn rasterize_line(x1: i32, y1: i32, x2: i32, y2: i32, algorithm: LineAlgorithm) -> PixelSequence {
    let points = algorithm.rasterize(x1, y1, x2, y2);
    tracing::trace!(
        %algorithm,
        x1, y1, x2, y2,
        count = points.len(),
        "rasterized line"
    );
    points
}

// ============================================================================
// SlopeClass
// ============================================================================

/// Slope magnitude class of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeClass {
    /// `|m| < 1`: x drives.
    Gentle,
    /// `|m| > 1`: y drives.
    Steep,
    /// `|m| = 1`.
    Diagonal,
}

impl SlopeClass {
    pub fn of(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = (x2 as i64 - x1 as i64).abs();
        let dy = (y2 as i64 - y1 as i64).abs();
        match dx.cmp(&dy) {
            std::cmp::Ordering::Greater => SlopeClass::Gentle,
            std::cmp::Ordering::Less => SlopeClass::Steep,
            std::cmp::Ordering::Equal => SlopeClass::Diagonal,
        }
    }
}

impl std::fmt::Display for SlopeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SlopeClass::Gentle => "|m| < 1",
            SlopeClass::Steep => "|m| > 1",
            SlopeClass::Diagonal => "|m| = 1",
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
