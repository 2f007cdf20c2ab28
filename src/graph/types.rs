//! Core type definitions for the synergy graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized identifier for a card, used as the key in every graph
/// structure. Produced from a display name by [`crate::names::normalize`];
/// equality on `VertexId` is what joins the adjacency graph, the weighted
/// graph, and the name map together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId(s)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId(s.to_string())
    }
}
