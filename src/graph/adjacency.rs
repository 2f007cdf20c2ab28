//! In-memory unweighted adjacency graph
//!
//! Loaded once per session from the ego-network source and treated as
//! immutable afterwards. Neighbor lists keep their source order.

use super::VertexId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Sparse unweighted graph: vertex id -> neighbor ids
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    neighbors: HashMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parsed source entries.
    ///
    /// Neighbor ids that are not themselves keys of the graph are a
    /// data-quality condition in the source (the vertex set is expected to
    /// be closed). They are kept, since membership tests against them are
    /// harmless, but logged so the source can be fixed upstream.
    pub fn from_entries(entries: HashMap<VertexId, Vec<VertexId>>) -> Self {
        let graph = Self { neighbors: entries };
        let dangling = graph
            .neighbors
            .values()
            .flatten()
            .filter(|n| !graph.neighbors.contains_key(*n))
            .count();
        if dangling > 0 {
            warn!(
                "Adjacency source references {} neighbor entries outside the vertex set",
                dangling
            );
        }
        debug!("Loaded adjacency graph with {} vertices", graph.neighbors.len());
        graph
    }

    /// Set the neighbor list for a vertex, replacing any previous list.
    pub fn insert(&mut self, vertex: VertexId, neighbors: Vec<VertexId>) {
        self.neighbors.insert(vertex, neighbors);
    }

    /// Neighbors of a vertex, or the empty slice for an unknown vertex.
    /// Never fails.
    pub fn neighbors_of(&self, vertex: &VertexId) -> &[VertexId] {
        self.neighbors.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full known vertex set, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.neighbors.keys()
    }

    /// Membership check, used to validate external name lists against the
    /// graph before display.
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.neighbors.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
