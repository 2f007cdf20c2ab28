//! Sparse pairwise synergy weights
//!
//! Weights come from the interaction terms of an upstream model and are
//! keyed by ordered vertex pairs. Storage is directed: `(a, b)` and
//! `(b, a)` are independent entries and only one direction may exist.
//! Consumers that want symmetry must query both directions themselves.

use super::VertexId;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Sparse mapping from ordered vertex pairs to a non-negative weight
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    weights: HashMap<VertexId, HashMap<VertexId, f64>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((VertexId, VertexId), f64)>,
    {
        let mut graph = Self::new();
        for ((a, b), weight) in pairs {
            graph.insert(a, b, weight);
        }
        debug!("Loaded weighted graph with {} stored pairs", graph.len());
        graph
    }

    pub fn insert(&mut self, a: VertexId, b: VertexId, weight: f64) {
        self.weights.entry(a).or_default().insert(b, weight);
    }

    /// Stored weight for the directed pair `(a, b)`, or 0.0 when absent.
    /// A missing entry is a valid lookup, never an error.
    pub fn weight_between(&self, a: &VertexId, b: &VertexId) -> f64 {
        self.weights
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0.0)
    }

    /// Maximum over the stored weights only, for intensity scaling.
    /// 0.0 for an empty graph.
    pub fn max_weight(&self) -> f64 {
        self.weights
            .values()
            .flat_map(|row| row.values())
            .fold(0.0, |acc, &w| acc.max(w))
    }

    /// Distinct first components of the stored keys, sorted
    /// lexicographically. This is the vertex universe implied by the data,
    /// used as the matrix axis.
    pub fn row_vertices(&self) -> Vec<VertexId> {
        let distinct: BTreeSet<&VertexId> = self.weights.keys().collect();
        distinct.into_iter().cloned().collect()
    }

    /// Number of stored directed pairs.
    pub fn len(&self) -> usize {
        self.weights.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VertexId {
        VertexId::new(s)
    }

    #[test]
    fn test_lookup_defaults_to_zero() {
        let mut graph = WeightedGraph::new();
        graph.insert(v("a"), v("b"), 3.0);
        assert_eq!(graph.weight_between(&v("a"), &v("b")), 3.0);
        assert_eq!(graph.weight_between(&v("b"), &v("c")), 0.0);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut graph = WeightedGraph::new();
        graph.insert(v("a"), v("b"), 3.0);
        graph.insert(v("b"), v("a"), 1.0);
        assert_eq!(graph.weight_between(&v("a"), &v("b")), 3.0);
        assert_eq!(graph.weight_between(&v("b"), &v("a")), 1.0);
    }

    #[test]
    fn test_max_weight_over_stored_entries() {
        let graph = WeightedGraph::from_pairs(vec![
            ((v("a"), v("b")), 0.4),
            ((v("b"), v("a")), 2.5),
        ]);
        assert_eq!(graph.max_weight(), 2.5);
    }

    #[test]
    fn test_max_weight_empty_graph_is_zero() {
        assert_eq!(WeightedGraph::new().max_weight(), 0.0);
    }

    #[test]
    fn test_row_vertices_sorted_distinct_firsts() {
        let mut graph = WeightedGraph::new();
        graph.insert(v("b"), v("a"), 1.0);
        graph.insert(v("a"), v("b"), 2.0);
        graph.insert(v("a"), v("c"), 3.0);
        assert_eq!(graph.row_vertices(), vec![v("a"), v("b")]);
    }

    #[test]
    fn test_len_counts_directed_pairs() {
        let mut graph = WeightedGraph::new();
        graph.insert(v("a"), v("b"), 1.0);
        graph.insert(v("a"), v("c"), 1.0);
        graph.insert(v("b"), v("a"), 1.0);
        assert_eq!(graph.len(), 3);
    }
}
