//! # scanconv
//!
//! Discrete scan-conversion algorithms and the chart geometry built on them.
//!
//! Every function here is pure: geometric input in, ordered pixel
//! coordinates or angles out. Drawing those points (windows, contexts,
//! colors, event loops) is left to the caller.
//!
//! ## Algorithms
//!
//! - **Lines**: real-valued DDA and integer Bresenham, selected through
//!   [`LineAlgorithm`] or the [`LineRasterizer`] trait
//! - **Circles**: midpoint algorithm with 8-way symmetry
//! - **Ellipses**: two-region midpoint algorithm with 4-way symmetry
//!
//! ## Charts
//!
//! - [`normalize`] maps a dataset into a pixel frame and
//!   [`build_chart_line`] chains line segments through it
//! - [`partition_sectors`] splits a circle into proportional pie sectors
//!
//! ```
//! use scanconv::{rasterize_line, LineAlgorithm, PointI};
//!
//! let line = rasterize_line(0, 0, 5, 2, LineAlgorithm::Bresenham);
//! assert_eq!(line.first(), Some(&PointI::new(0, 0)));
//! assert_eq!(line.last(), Some(&PointI::new(5, 2)));
//! ```

// Foundation
pub mod basics;
pub mod error;

// Rasterizers
pub mod circle_midpoint;
pub mod dda_line;
pub mod ellipse_midpoint;
pub mod line_bresenham;
pub mod rasterizer_line;

// Chart geometry
pub mod chart_line;
pub mod normalize;
pub mod sector;

#[cfg(feature = "config")]
pub mod config;

pub use basics::{PixelSequence, PointD, PointI, RectI};
pub use chart_line::build_chart_line;
pub use circle_midpoint::rasterize_circle;
pub use ellipse_midpoint::{ellipse_bounding_rect, rasterize_ellipse};
pub use error::DomainError;
pub use normalize::{normalize, Bounds, ChartFrame, Normalized};
pub use rasterizer_line::{rasterize_line, Bresenham, Dda, LineAlgorithm, LineRasterizer, SlopeClass};
pub use sector::{circle_outline, partition_sectors, Sector};

#[cfg(feature = "config")]
pub use error::ConfigError;
