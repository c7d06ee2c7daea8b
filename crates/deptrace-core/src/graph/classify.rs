//! Three-way path classification and report aggregation

use std::collections::HashSet;

use super::types::{DepPath, PathKind};

/// Label a completed path.
///
/// A repeated node anywhere marks a loop. A looping walk that ends back on
/// its own start is a pure loop; any other repeat means the walk merely
/// passes through one.
pub fn classify(path: &DepPath) -> PathKind {
    let mut seen = HashSet::new();
    let mut has_repeat = false;
    for node in path.nodes() {
        if !seen.insert(node.as_str()) {
            has_repeat = true;
        }
    }

    if !has_repeat {
        PathKind::NoLoop
    } else if path.len() > 1 && path.first() == path.last() {
        PathKind::PureLoop
    } else {
        PathKind::ContainsLoop
    }
}

/// Classified paths bucketed for reporting.
///
/// The three buckets are independent lists in production order; they are
/// only brought together at output time.
#[derive(Debug, Default)]
pub struct Report {
    pub total: usize,
    pub no_loop: Vec<DepPath>,
    pub pure_loop: Vec<DepPath>,
    pub contains_loop: Vec<DepPath>,
}

impl Report {
    /// Bucket paths in a single classification pass.
    pub fn from_paths(paths: Vec<DepPath>) -> Self {
        let mut report = Report {
            total: paths.len(),
            ..Report::default()
        };

        for path in paths {
            match classify(&path) {
                PathKind::NoLoop => report.no_loop.push(path),
                PathKind::PureLoop => report.pure_loop.push(path),
                PathKind::ContainsLoop => report.contains_loop.push(path),
            }
        }

        report
    }

    /// True when any bucket holds a looping path.
    pub fn has_loops(&self) -> bool {
        !self.pure_loop.is_empty() || !self.contains_loop.is_empty()
    }
}
