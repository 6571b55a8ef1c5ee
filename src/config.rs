//! JSON chart descriptions.
//!
//! A [`ChartConfig`] bundles a pixel layout, any number of line graphs, and
//! an optional pie chart. Colors are opaque RGB triples handed through to
//! whoever draws the result.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::basics::{PointD, PointI};
use crate::chart_line::build_chart_line;
use crate::error::{ConfigError, DomainError};
use crate::normalize::{normalize, ChartFrame, Normalized};
use crate::rasterizer_line::LineAlgorithm;
use crate::sector::{partition_sectors, Sector};

/// Linear RGB in `[0, 1]`.
pub type Rgb = [f32; 3];

fn default_margin() -> i32 {
    50
}

fn default_grid_divisions() -> u32 {
    10
}

fn default_segments() -> u32 {
    100
}

fn default_color() -> Rgb {
    [1.0, 1.0, 1.0]
}

// ============================================================================
// Layout
// ============================================================================

/// Pixel surface a chart is laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_margin")]
    pub margin: i32,
    #[serde(default = "default_grid_divisions")]
    pub grid_divisions: u32,
}

impl ChartLayout {
    pub fn frame(&self) -> ChartFrame {
        ChartFrame::new(self.width, self.height, self.margin)
    }

    /// Reject sizes that leave no drawable area.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidLayout(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let shorter = i64::from(self.width.min(self.height));
        if self.margin < 0 || 2 * i64::from(self.margin) >= shorter {
            return Err(ConfigError::InvalidLayout(format!(
                "margin {} does not fit a {}x{} surface",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            margin: default_margin(),
            grid_divisions: default_grid_divisions(),
        }
    }
}

// ============================================================================
// Line graphs
// ============================================================================

/// One dataset plotted as a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    pub name: String,
    pub data: Vec<[f64; 2]>,
    #[serde(default)]
    pub algorithm: LineAlgorithm,
    #[serde(default = "default_color")]
    pub color: Rgb,
}

/// Rendered geometry of a [`LineGraphConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineGraph {
    /// Normalized data points (the markers) and their bounds.
    pub normalized: Normalized,
    /// Rasterized polyline through the markers.
    pub pixels: Vec<PointI>,
}

impl LineGraphConfig {
    pub fn points(&self) -> Vec<PointD> {
        self.data.iter().map(|&[x, y]| PointD::new(x, y)).collect()
    }

    /// Normalize into `layout` and rasterize the polyline.
    pub fn build(&self, layout: &ChartLayout) -> LineGraph {
        let normalized = normalize(&self.points(), layout.width, layout.height, layout.margin);
        let pixels = build_chart_line(&normalized.points, &self.algorithm);
        LineGraph { normalized, pixels }
    }
}

// ============================================================================
// Pie chart
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    #[serde(default = "default_color")]
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub center: [f64; 2],
    pub radius: f64,
    /// Arc subdivisions for a full circle.
    #[serde(default = "default_segments")]
    pub segments: u32,
    pub slices: Vec<PieSlice>,
}

impl PieChartConfig {
    pub fn sectors(&self) -> Result<Vec<Sector<String, Rgb>>, DomainError> {
        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
        partition_sectors(
            &values,
            self.slices.iter().map(|s| s.label.clone()),
            self.slices.iter().map(|s| s.color),
        )
    }
}

// ============================================================================
// ChartConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub line_graphs: Vec<LineGraphConfig>,
    #[serde(default)]
    pub pie: Option<PieChartConfig>,
}

impl ChartConfig {
    /// Parse and validate a JSON description.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = serde_json::from_str(s)?;
        config.layout.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading chart config");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

// ============================================================================
// Tests
// ============================================================================
