//! Ego-network expansion by neighborhood overlap
//!
//! Given a set of "ego" cards, find every card whose neighborhood mostly
//! falls inside the combined ego neighborhood. The ratio is intentionally
//! asymmetric: the denominator is the candidate's own degree, not the
//! union, so a low-degree card nested inside a popular ego neighborhood
//! still scores 1.0.

use crate::graph::{AdjacencyGraph, VertexId};
use crate::names::NameMap;
use std::collections::HashSet;
use tracing::debug;

/// Similarity selection configuration
pub struct SimilarityConfig {
    /// Minimum overlap ratio for a candidate to count as similar
    pub threshold: f64,
    /// Drop ego vertices from the result. Off by default: an ego vertex
    /// trivially passes its own overlap test and upstream keeps it.
    pub exclude_ego: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            exclude_ego: false,
        }
    }
}

/// Vertices similar to the ego set, sorted by vertex id.
///
/// A candidate with no stored neighbors is never similar (its ratio would
/// be 0/0). An empty ego set, or one whose members have no stored
/// neighbors, yields an empty result; neither is an error.
pub fn similar_vertices(
    graph: &AdjacencyGraph,
    egos: &[VertexId],
    config: &SimilarityConfig,
) -> Vec<VertexId> {
    // Membership is tested against the deduplicated union so a neighbor
    // shared by several ego cards is not double-counted in the ratio.
    let main_adjacent: HashSet<&VertexId> = egos
        .iter()
        .flat_map(|ego| graph.neighbors_of(ego))
        .collect();
    let ego_set: HashSet<&VertexId> = egos.iter().collect();

    let mut selected: Vec<VertexId> = Vec::new();
    for vertex in graph.vertices() {
        if config.exclude_ego && ego_set.contains(vertex) {
            continue;
        }
        let candidate: HashSet<&VertexId> = graph.neighbors_of(vertex).iter().collect();
        if candidate.is_empty() {
            continue;
        }
        let overlap = candidate
            .iter()
            .filter(|n| main_adjacent.contains(*n))
            .count();
        let ratio = overlap as f64 / candidate.len() as f64;
        if ratio >= config.threshold {
            selected.push(vertex.clone());
        }
    }

    selected.sort();
    debug!(
        "Selected {} of {} vertices as similar to {} egos",
        selected.len(),
        graph.vertex_count(),
        egos.len()
    );
    selected
}

/// Similar vertices resolved to display names, sorted by name.
///
/// Candidates missing from the name map are silently dropped; the graph
/// and the card list are maintained independently and may drift.
pub fn similar_names(
    graph: &AdjacencyGraph,
    names: &NameMap,
    egos: &[VertexId],
    config: &SimilarityConfig,
) -> Vec<String> {
    let mut display: Vec<String> = similar_vertices(graph, egos, config)
        .iter()
        .filter_map(|vertex| names.name_of(vertex).ok())
        .map(str::to_string)
        .collect();
    display.sort();
    display
}
