//! Depth-first path enumeration with in-path cycle detection

use std::collections::HashSet;

use super::types::{DepPath, Graph};

/// Enumerate every walk from each still-active root.
///
/// Roots are the graph's source nodes in first-seen order. Once any emitted
/// path contains a node, that node stops being eligible as a root, though it
/// may still appear as an intermediate in later paths. The coverage is
/// deliberately coarse: a source consumed as an intermediate before its own
/// turn is skipped even if some of its edges were never walked. Dense graphs
/// produce one path per distinct walk, which can grow exponentially.
#[tracing::instrument(skip(graph), fields(sources = graph.source_count()))]
pub fn explore(graph: &Graph) -> Vec<DepPath> {
    let mut active: HashSet<&str> = graph.sources().collect();
    let mut all_paths = Vec::new();

    for root in graph.sources() {
        if !active.contains(root) {
            continue;
        }

        let found = search(graph, root, Vec::new(), HashSet::new());
        for path in &found {
            for node in path.nodes() {
                active.remove(node.as_str());
            }
        }

        tracing::trace!(root, paths = found.len(), "explored root");
        all_paths.extend(found);
    }

    all_paths
}

/// Walk every branch from `node`.
///
/// `path` and `visited` are per-branch snapshots: each recursive call clones
/// them, so sibling branches never observe each other's extensions. A branch
/// ends at a node with no outgoing edges, or one step after revisiting a node
/// already on the path.
fn search(
    graph: &Graph,
    node: &str,
    mut path: Vec<String>,
    mut visited: HashSet<String>,
) -> Vec<DepPath> {
    path.push(node.to_string());
    visited.insert(node.to_string());

    let Some(targets) = graph.outgoing(node) else {
        return vec![DepPath::new(path)];
    };

    let mut results = Vec::new();
    for target in targets {
        if visited.contains(target) {
            // Loop closure: record the revisit, do not extend further.
            let mut closed = path.clone();
            closed.push(target.clone());
            results.push(DepPath::new(closed));
        } else {
            results.extend(search(graph, target, path.clone(), visited.clone()));
        }
    }

    if results.is_empty() {
        // Unreachable while `targets` is non-empty; kept so a walk is never
        // silently dropped.
        results.push(DepPath::new(path));
    }

    results
}
