//! Display-name normalization and the vertex-id to name mapping
//!
//! Every data source keys cards differently ("Goblin Barrel" in the card
//! list, `goblin_barrel` in the graph files). `normalize` is the single
//! normalization shared by all producers and consumers of [`VertexId`]s,
//! and [`NameMap`] recovers the human-readable name for display.

use crate::graph::VertexId;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during name resolution
#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Vertex {0} has no known display name")]
    UnknownVertex(VertexId),
}

pub type NameResult<T> = Result<T, NameError>;

/// Normalize a display name into its graph key.
///
/// Lowercases, strips punctuation, and joins whitespace runs with `_`, so
/// `"Goblin Barrel"` becomes `goblin_barrel` and `"P.E.K.K.A"` becomes
/// `pekka`. Idempotent: normalizing an already-normalized id is a no-op.
pub fn normalize(display_name: &str) -> VertexId {
    let lowered = display_name.to_lowercase();
    let id = lowered
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    VertexId::new(id)
}

/// Mapping from normalized vertex id to display name
///
/// Built once per session from the card list and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<VertexId, String>,
}

impl NameMap {
    /// Build the mapping by normalizing each display name.
    ///
    /// If two names normalize to the same id the later entry wins; that is
    /// a data-quality condition in the card list, logged and tolerated.
    pub fn build<I, S>(display_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashMap<VertexId, String> = HashMap::new();
        for display in display_names {
            let display = display.into();
            let id = normalize(&display);
            if let Some(previous) = names.insert(id.clone(), display) {
                warn!("Display names '{}' and '{}' both normalize to {}", previous, names[&id], id);
            }
        }
        debug!("Built name map with {} entries", names.len());
        Self { names }
    }

    /// Resolve a vertex id to its display name.
    ///
    /// Unknown ids are a contract violation at the call site: candidate
    /// lists must be pre-filtered against a known vertex set (see
    /// [`contains`](Self::contains)) before dereferencing names.
    pub fn name_of(&self, id: &VertexId) -> NameResult<&str> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| NameError::UnknownVertex(id.clone()))
    }

    pub fn contains(&self, id: &VertexId) -> bool {
        self.names.contains_key(id)
    }

    /// All known vertex ids, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &VertexId> {
        self.names.keys()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
