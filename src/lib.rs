//! Synergy Graph
//!
//! Core data logic for a card-synergy visualizer: turns sparse graph
//! sources into the derived views a rendering layer consumes.
//!
//! # Architecture
//!
//! - [`names`]: display-name normalization and the id/name mapping
//! - [`graph`]: the session-immutable [`graph::AdjacencyGraph`] and
//!   [`graph::WeightedGraph`] structures
//! - [`algo`]: ego-network expansion by neighborhood overlap and the
//!   dense heatmap weight matrix
//! - [`loader`]: parsing of the external JSON sources
//!
//! Everything here is synchronous, pure computation over already-loaded
//! data. Fetching the sources, wiring UI events, and rendering belong to
//! the host application; it calls in with parsed data and gets plain data
//! structures back.

pub mod algo;
pub mod graph;
pub mod loader;
pub mod names;

pub use algo::{build_matrix, build_named_matrix, DenseMatrix, MatrixCell, SimilarityConfig};
pub use algo::{similar_names, similar_vertices};
pub use graph::{AdjacencyGraph, VertexId, WeightedGraph};
pub use loader::{LoadError, LoadResult};
pub use names::{normalize, NameError, NameMap, NameResult};
