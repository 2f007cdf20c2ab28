//! Parsing of the external JSON sources
//!
//! The host application fetches three static resources per session and
//! hands their contents here:
//! - the card list (`{"items": [{"name": ...}, ...]}`)
//! - the adjacency graph (vertex id -> neighbor id list)
//! - the synergy weights (`{"wgt": {"a:b": 3.0, ...}}`)
//!
//! Parsing is the only fallible step; the resulting structures are
//! immutable for the rest of the session. Malformed individual entries
//! inside an otherwise valid weights document are skipped with a warning
//! rather than failing the whole load, since the sources are maintained
//! independently.

use crate::graph::{AdjacencyGraph, VertexId, WeightedGraph};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading a source document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON source: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Deserialize)]
struct CardListDoc {
    items: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WeightsDoc {
    wgt: HashMap<String, f64>,
}

/// Extract the display names from a card-list document. Extra fields on
/// each entry are ignored.
pub fn parse_card_list(json: &str) -> LoadResult<Vec<String>> {
    let doc: CardListDoc = serde_json::from_str(json)?;
    let names: Vec<String> = doc.items.into_iter().map(|entry| entry.name).collect();
    debug!("Parsed card list with {} names", names.len());
    Ok(names)
}

/// Parse an adjacency document: a JSON object mapping each vertex id to
/// its neighbor id list.
pub fn parse_adjacency(json: &str) -> LoadResult<AdjacencyGraph> {
    let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
    let entries: HashMap<VertexId, Vec<VertexId>> = raw
        .into_iter()
        .map(|(vertex, neighbors)| {
            (
                VertexId::new(vertex),
                neighbors.into_iter().map(VertexId::new).collect(),
            )
        })
        .collect();
    Ok(AdjacencyGraph::from_entries(entries))
}

/// Parse a weights document. Pair keys are split on the first `:`; keys
/// without a separator and negative weights are data-quality defects in
/// the source, skipped with a warning.
pub fn parse_weights(json: &str) -> LoadResult<WeightedGraph> {
    let doc: WeightsDoc = serde_json::from_str(json)?;
    let mut graph = WeightedGraph::new();
    for (key, weight) in doc.wgt {
        let (a, b) = match key.split_once(':') {
            Some(pair) => pair,
            None => {
                warn!("Skipping weight key '{}' with no pair separator", key);
                continue;
            }
        };
        if weight < 0.0 {
            warn!("Skipping negative weight {} for pair '{}'", weight, key);
            continue;
        }
        graph.insert(VertexId::new(a), VertexId::new(b), weight);
    }
    debug!("Parsed weighted graph with {} stored pairs", graph.len());
    Ok(graph)
}

pub fn load_card_list_file(path: impl AsRef<Path>) -> LoadResult<Vec<String>> {
    parse_card_list(&fs::read_to_string(path)?)
}

pub fn load_adjacency_file(path: impl AsRef<Path>) -> LoadResult<AdjacencyGraph> {
    parse_adjacency(&fs::read_to_string(path)?)
}

pub fn load_weights_file(path: impl AsRef<Path>) -> LoadResult<WeightedGraph> {
    parse_weights(&fs::read_to_string(path)?)
}
