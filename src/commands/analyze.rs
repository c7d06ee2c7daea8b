//! Analyze command: read records, explore paths, report

use std::path::Path;
use std::time::Instant;

use deptrace_core::error::Result;
use deptrace_core::graph::{builder, explore, PathKind, Report};
use deptrace_core::records;

use crate::cli::{Cli, OutputFormat};

/// Input file used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "dependencies.txt";

/// Execute the analyze command
pub fn execute(cli: &Cli, input: &Path) -> Result<()> {
    let start = Instant::now();

    let edges = records::read_edges(input)?;
    let graph = builder::build(edges);
    tracing::debug!(elapsed = ?start.elapsed(), sources = graph.source_count(), "build_graph");

    let paths = explore(&graph);
    tracing::debug!(elapsed = ?start.elapsed(), paths = paths.len(), "explore");

    let report = Report::from_paths(paths);

    match cli.format {
        OutputFormat::Human => output_human(&report),
        OutputFormat::Json => output_json(&report),
    }

    Ok(())
}

/// Output the report in the line-oriented human format
fn output_human(report: &Report) {
    println!("Paths found: {}", report.total);

    if !report.no_loop.is_empty() {
        println!("No circular dependency:");
        for path in &report.no_loop {
            println!("{} ({})", path, PathKind::NoLoop.annotation());
        }
    }

    if report.has_loops() {
        println!("Circular dependency detected:");
        for path in &report.pure_loop {
            println!("{} ({})", path, PathKind::PureLoop.annotation());
        }
        for path in &report.contains_loop {
            println!("{} ({})", path, PathKind::ContainsLoop.annotation());
        }
    }
}

/// Output the report as a stable JSON envelope
fn output_json(report: &Report) {
    let payload = serde_json::json!({
        "paths_found": report.total,
        "no_loop": report.no_loop,
        "pure_loop": report.pure_loop,
        "contains_loop": report.contains_loop,
    });
    println!("{}", payload);
}
