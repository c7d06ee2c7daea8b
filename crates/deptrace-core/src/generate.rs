//! Random dependency fixture generation
//!
//! Convenience generator for exercising the analyzer: each uppercase letter
//! draws an out-degree from a fixed weighted distribution, then picks that
//! many distinct targets among the other letters. The output carries no
//! invariant the analyzer depends on beyond being valid edge records.

use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::Edge;

/// Weights for out-degrees 0 through 4.
const DEGREE_WEIGHTS: [f64; 5] = [54.0, 25.0, 12.5, 6.5, 2.0];

/// Generate a random edge list over the A-Z alphabet.
pub fn generate_edges<R: Rng>(rng: &mut R) -> Vec<Edge> {
    let degree_dist =
        WeightedIndex::new(DEGREE_WEIGHTS).expect("degree weights are static and non-zero");

    let mut edges = Vec::new();
    for left in 'A'..='Z' {
        let out_degree = degree_dist.sample(rng);
        if out_degree == 0 {
            continue;
        }

        let others: Vec<char> = ('A'..='Z').filter(|&c| c != left).collect();
        for &right in others.choose_multiple(rng, out_degree) {
            edges.push(Edge::new(left.to_string(), right.to_string()));
        }
    }

    edges
}

/// RNG seeded for reproducibility, or from entropy when no seed is given.
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_edges() {
        let a = generate_edges(&mut StdRng::seed_from_u64(7));
        let b = generate_edges(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_edges_stay_within_alphabet() {
        let edges = generate_edges(&mut StdRng::seed_from_u64(42));
        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                assert_eq!(endpoint.len(), 1);
                assert!(endpoint.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn test_no_self_edges_and_distinct_targets() {
        for seed in 0..20 {
            let edges = generate_edges(&mut StdRng::seed_from_u64(seed));
            for left in 'A'..='Z' {
                let targets: Vec<&str> = edges
                    .iter()
                    .filter(|e| e.from == left.to_string())
                    .map(|e| e.to.as_str())
                    .collect();
                assert!(targets.len() <= 4, "out-degree above 4 for {}", left);
                let distinct: HashSet<&str> = targets.iter().copied().collect();
                assert_eq!(distinct.len(), targets.len(), "repeated target for {}", left);
                assert!(!distinct.contains(left.to_string().as_str()));
            }
        }
    }
}
