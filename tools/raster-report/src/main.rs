// Copyright 2025. Console reports for scanconv rasterizers and chart geometry.
//
// Usage:
//   raster-report line <x1> <y1> <x2> <y2> [dda|bresenham]
//   raster-report circle <cx> <cy> <r>
//   raster-report ellipse <cx> <cy> <rx> <ry>
//   raster-report graph <config.json>
//   raster-report pie <config.json>
//   raster-report chart <config.json>
//   raster-report demo

use std::process;
use std::str::FromStr;

use raster_report::{
    chart_report, circle_report, demo_chart, ellipse_report, graph_report, init_logging,
    line_report, pie_chart_report, DEMO_CIRCLES, DEMO_ELLIPSES, DEMO_LINES,
};
use scanconv::config::ChartConfig;
use scanconv::{ConfigError, LineAlgorithm};

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "line" => cmd_line(&args[2..]),
        "circle" => cmd_circle(&args[2..]),
        "ellipse" => cmd_ellipse(&args[2..]),
        "graph" => cmd_graph(&args[2..]),
        "pie" => cmd_pie(&args[2..]),
        "chart" => cmd_chart(&args[2..]),
        "demo" => cmd_demo(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("raster-report - scan-conversion summaries");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  line <x1> <y1> <x2> <y2> [dda|bresenham]");
    eprintln!("      Rasterize a segment and describe its slope.");
    eprintln!();
    eprintln!("  circle <cx> <cy> <r>");
    eprintln!("  ellipse <cx> <cy> <rx> <ry>");
    eprintln!("      Rasterize a curve and count its points.");
    eprintln!();
    eprintln!("  graph <config.json>");
    eprintln!("      Normalize and rasterize the line graphs described in a JSON file.");
    eprintln!();
    eprintln!("  pie <config.json>");
    eprintln!("      Partition the pie chart described in a JSON file.");
    eprintln!();
    eprintln!("  chart <config.json>");
    eprintln!("      Both of the above, line graphs first.");
    eprintln!();
    eprintln!("  demo");
    eprintln!("      Run the built-in lines, circles, ellipses and charts.");
}

fn parse<T: FromStr>(what: &str, s: &str) -> T {
    s.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {}: '{}'", what, s);
        process::exit(1);
    })
}

fn cmd_line(args: &[String]) {
    if args.len() < 4 {
        eprintln!("Usage: raster-report line <x1> <y1> <x2> <y2> [dda|bresenham]");
        process::exit(1);
    }
    let x1 = parse("x1", &args[0]);
    let y1 = parse("y1", &args[1]);
    let x2 = parse("x2", &args[2]);
    let y2 = parse("y2", &args[3]);
    let algorithm: LineAlgorithm = args
        .get(4)
        .map(|s| parse("algorithm", s))
        .unwrap_or_default();

    println!("{}", line_report(x1, y1, x2, y2, algorithm));
}

fn cmd_circle(args: &[String]) {
    if args.len() < 3 {
        eprintln!("Usage: raster-report circle <cx> <cy> <r>");
        process::exit(1);
    }
    println!(
        "{}",
        circle_report(
            parse("cx", &args[0]),
            parse("cy", &args[1]),
            parse("radius", &args[2])
        )
    );
}

fn cmd_ellipse(args: &[String]) {
    if args.len() < 4 {
        eprintln!("Usage: raster-report ellipse <cx> <cy> <rx> <ry>");
        process::exit(1);
    }
    println!(
        "{}",
        ellipse_report(
            parse("cx", &args[0]),
            parse("cy", &args[1]),
            parse("rx", &args[2]),
            parse("ry", &args[3])
        )
    );
}

fn load_config(command: &str, args: &[String]) -> ChartConfig {
    let Some(path) = args.first() else {
        eprintln!("Usage: raster-report {} <config.json>", command);
        process::exit(1);
    };

    ChartConfig::from_json_file(path).unwrap_or_else(|e| {
        tracing::error!(path = %path, error = %e, "config rejected");
        eprintln!("{}", e);
        process::exit(1);
    })
}

fn cmd_graph(args: &[String]) {
    let config = load_config("graph", args);
    if config.line_graphs.is_empty() {
        eprintln!("No line graphs in {}", args[0]);
        process::exit(1);
    }
    let reports: Vec<String> = config
        .line_graphs
        .iter()
        .map(|g| graph_report(g, &config.layout))
        .collect();
    println!("{}", reports.join("\n\n"));
}

fn cmd_pie(args: &[String]) {
    let config = load_config("pie", args);
    let Some(pie) = &config.pie else {
        eprintln!("No pie chart in {}", args[0]);
        process::exit(1);
    };
    print_report(pie_chart_report(pie));
}

fn cmd_chart(args: &[String]) {
    let config = load_config("chart", args);
    print_report(chart_report(&config));
}

fn cmd_demo() {
    for &(x1, y1, x2, y2) in &DEMO_LINES {
        println!("{}", line_report(x1, y1, x2, y2, LineAlgorithm::Bresenham));
    }
    println!();
    for &(cx, cy, r) in &DEMO_CIRCLES {
        println!("{}", circle_report(cx, cy, r));
    }
    println!();
    for &(cx, cy, rx, ry) in &DEMO_ELLIPSES {
        println!("{}", ellipse_report(cx, cy, rx, ry));
    }
    println!();
    print_report(chart_report(&demo_chart()));
}

fn print_report(report: Result<String, ConfigError>) {
    match report {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(error = %e, "chart rejected");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
