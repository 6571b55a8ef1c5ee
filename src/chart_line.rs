//! Polyline generation for line graphs.

use crate::basics::{PixelSequence, PointI};
use crate::rasterizer_line::LineRasterizer;

/// Rasterize consecutive pairs of `points` and concatenate the segments in
/// order.
///
/// Each segment carries both of its endpoints, so every interior joint pixel
/// appears twice. Fewer than two points produce an empty sequence.
pub fn build_chart_line<R: LineRasterizer + ?Sized>(points: &[PointI], rasterizer: &R) -> PixelSequence {
    let out: PixelSequence = points
        .windows(2)
        .flat_map(|w| rasterizer.rasterize_points(w[0], w[1]))
        .collect();
    tracing::trace!(
        vertices = points.len(),
        count = out.len(),
        "built chart line"
    );
    out
}

// ============================================================================
// Tests
// ============================================================================
