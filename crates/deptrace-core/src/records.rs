//! Edge-record parsing for the line-oriented input format
//!
//! One edge per line: `<source> -> <destination>`. A line that does not
//! split into exactly three whitespace-separated tokens is skipped, not an
//! error. The middle token is not inspected.

use std::fs;
use std::path::Path;

use crate::error::{DeptraceError, Result};
use crate::graph::Edge;

/// Parse edge records from text, silently skipping malformed lines.
pub fn parse_edges(input: &str) -> Vec<Edge> {
    let mut edges = Vec::new();
    for line in input.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [from, _, to] => edges.push(Edge::new(*from, *to)),
            [] => {}
            _ => tracing::trace!(line, "skipped malformed record"),
        }
    }
    edges
}

/// Read edge records from a file.
///
/// A missing file is a data error; other I/O failures pass through.
pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    let text = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            DeptraceError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DeptraceError::Io(err)
        }
    })?;

    let edges = parse_edges(&text);
    tracing::debug!(path = %path.display(), edges = edges.len(), "read edge records");
    Ok(edges)
}

/// Write edges in the input format, one record per line.
pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    let mut out = String::new();
    for edge in edges {
        out.push_str(&edge.from);
        out.push_str(" -> ");
        out.push_str(&edge.to);
        out.push('\n');
    }

    fs::write(path, out).map_err(|err| DeptraceError::io_operation("write", path.display(), err))
}
