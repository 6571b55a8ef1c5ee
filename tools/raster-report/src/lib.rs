// Copyright 2025. Console reports for scanconv rasterizers and chart geometry.
//
// Each report is built as a String so the formatting can be tested without
// capturing stdout.

use std::fmt::Write as _;

use scanconv::config::{ChartConfig, ChartLayout, LineGraphConfig, PieChartConfig, PieSlice, Rgb};
use scanconv::{
    rasterize_circle, rasterize_ellipse, rasterize_line, ConfigError, LineAlgorithm, Sector,
    SlopeClass,
};

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// ============================================================================
// Shape reports
// ============================================================================

pub fn line_report(x1: i32, y1: i32, x2: i32, y2: i32, algorithm: LineAlgorithm) -> String {
    let points = rasterize_line(x1, y1, x2, y2, algorithm);
    format!(
        "Line ({},{}) to ({},{}) [{}]: dx={}, dy={}, {}, points={}",
        x1,
        y1,
        x2,
        y2,
        algorithm,
        (x2 - x1).abs(),
        (y2 - y1).abs(),
        SlopeClass::of(x1, y1, x2, y2),
        points.len()
    )
}

pub fn circle_report(cx: i32, cy: i32, r: u32) -> String {
    let points = rasterize_circle(cx, cy, r);
    format!(
        "Circle at ({},{}) with radius {}: {} points generated",
        cx,
        cy,
        r,
        points.len()
    )
}

pub fn ellipse_report(cx: i32, cy: i32, rx: u32, ry: u32) -> String {
    let points = rasterize_ellipse(cx, cy, rx, ry);
    format!(
        "Ellipse at ({},{}) with radii ({},{}): {} points generated",
        cx,
        cy,
        rx,
        ry,
        points.len()
    )
}

// ============================================================================
// Chart reports
// ============================================================================

pub fn graph_report(graph: &LineGraphConfig, layout: &ChartLayout) -> String {
    let built = graph.build(layout);
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", graph.name, graph.algorithm);
    for (i, [x, y]) in graph.data.iter().enumerate() {
        let _ = writeln!(out, "  Point {}: ({}, {})", i + 1, x, y);
    }
    if let Some(b) = built.normalized.bounds {
        let _ = writeln!(
            out,
            "  Bounds: x=[{}, {}] y=[{}, {}]",
            b.x_min, b.x_max, b.y_min, b.y_max
        );
    }
    let grid = layout.frame().grid_lines(layout.grid_divisions);
    let _ = writeln!(out, "  Grid lines: {}", grid.len());
    let _ = write!(out, "  Pixels: {}", built.pixels.len());
    out
}

/// Slice table followed by the fan size and label anchor of every sector.
pub fn pie_report(pie: &PieChartConfig, sectors: &[Sector<String, Rgb>]) -> String {
    let rule = "-".repeat(60);
    let total: f64 = sectors.iter().map(|s| s.value).sum();
    let mut out = String::new();
    let _ = writeln!(out, "Pie Chart Data:");
    let _ = writeln!(out, "{rule}");
    for s in sectors {
        let _ = writeln!(out, "{:12}: {:6.1} ({:5.1}%)", s.label, s.value, s.percentage);
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:12}: {:6.1} (100.0%)", "Total", total);

    let [cx, cy] = pie.center;
    let _ = write!(
        out,
        "Geometry: center ({:.1}, {:.1}), radius {:.1}, {} segments",
        cx, cy, pie.radius, pie.segments
    );
    for s in sectors {
        let fan = s.arc_vertices(cx, cy, pie.radius, pie.segments);
        let anchor = s.label_anchor(cx, cy, pie.radius);
        let _ = write!(
            out,
            "\n{:12}: {} fan vertices, label at ({:.1}, {:.1})",
            s.label,
            fan.len(),
            anchor.x,
            anchor.y
        );
    }
    out
}

pub fn pie_chart_report(pie: &PieChartConfig) -> Result<String, ConfigError> {
    Ok(pie_report(pie, &pie.sectors()?))
}

// ============================================================================
// Built-in scenes
// ============================================================================

pub const DEMO_LINES: [(i32, i32, i32, i32); 10] = [
    (100, 300, 400, 350),
    (100, 200, 400, 150),
    (450, 300, 750, 300),
    (200, 100, 250, 500),
    (350, 500, 400, 100),
    (600, 100, 600, 500),
    (100, 100, 300, 300),
    (500, 100, 700, 300),
    (50, 450, 350, 100),
    (450, 450, 750, 150),
];

pub const DEMO_CIRCLES: [(i32, i32, u32); 6] = [
    (200, 150, 80),
    (400, 300, 120),
    (600, 150, 60),
    (200, 450, 100),
    (600, 450, 90),
    (400, 150, 40),
];

pub const DEMO_ELLIPSES: [(i32, i32, u32, u32); 5] = [
    (250, 200, 150, 100),
    (650, 200, 100, 150),
    (250, 550, 180, 120),
    (650, 550, 120, 80),
    (500, 400, 100, 100),
];

/// Sales and temperature line graphs plus the five-product pie chart.
pub fn demo_chart() -> ChartConfig {
    let series = |v: &[f64]| -> Vec<[f64; 2]> {
        v.iter()
            .enumerate()
            .map(|(i, &y)| [(i + 1) as f64, y])
            .collect()
    };
    let slice = |label: &str, value: f64, color: Rgb| PieSlice {
        label: label.to_string(),
        value,
        color,
    };

    ChartConfig {
        layout: ChartLayout {
            width: 1000,
            height: 700,
            margin: 80,
            grid_divisions: 10,
        },
        line_graphs: vec![
            LineGraphConfig {
                name: "Sales Data".to_string(),
                data: series(&[20.0, 35.0, 30.0, 50.0, 45.0, 60.0, 55.0, 70.0, 75.0, 85.0]),
                algorithm: LineAlgorithm::Bresenham,
                color: [0.2, 0.8, 1.0],
            },
            LineGraphConfig {
                name: "Temperature Data".to_string(),
                data: series(&[15.0, 18.0, 22.0, 25.0, 28.0, 32.0, 30.0, 27.0, 23.0, 20.0]),
                algorithm: LineAlgorithm::Dda,
                color: [1.0, 0.5, 0.2],
            },
        ],
        pie: Some(PieChartConfig {
            center: [400.0, 350.0],
            radius: 200.0,
            segments: 100,
            slices: vec![
                slice("Product A", 30.0, [1.0, 0.2, 0.2]),
                slice("Product B", 45.0, [0.2, 0.8, 0.2]),
                slice("Product C", 15.0, [0.2, 0.4, 1.0]),
                slice("Product D", 60.0, [1.0, 0.8, 0.2]),
                slice("Product E", 25.0, [1.0, 0.4, 0.8]),
            ],
        }),
    }
}

/// Every report for a chart config, in order: line graphs, then the pie.
pub fn chart_report(config: &ChartConfig) -> Result<String, ConfigError> {
    let mut sections: Vec<String> = config
        .line_graphs
        .iter()
        .map(|g| graph_report(g, &config.layout))
        .collect();
    if let Some(pie) = &config.pie {
        sections.push(pie_chart_report(pie)?);
    }
    Ok(sections.join("\n\n"))
}

// ============================================================================
// Tests
// ============================================================================
