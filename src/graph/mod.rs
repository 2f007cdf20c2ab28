//! Graph structures for the card-synergy data
//!
//! Two immutable, session-scoped views of the same card pool:
//! - [`AdjacencyGraph`]: unweighted neighbor lists, used for ego-network
//!   expansion by neighborhood overlap
//! - [`WeightedGraph`]: sparse pairwise synergy strengths, used to build the
//!   dense heatmap matrix

pub mod adjacency;
pub mod types;
pub mod weighted;

pub use adjacency::AdjacencyGraph;
pub use types::VertexId;
pub use weighted::WeightedGraph;
