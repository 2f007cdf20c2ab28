//! Dense weight matrix for heatmap rendering
//!
//! Expands the sparse weighted graph into a complete `|V| x |V|` grid with
//! explicit zeros, so the renderer gets O(1) per-cell access and a fixed
//! row/column order. The axis universe is inferred from the stored keys
//! themselves (distinct first components, sorted), matching how the
//! heatmap derives its labels from observed interactions.

use crate::graph::{VertexId, WeightedGraph};
use crate::names::NameMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One heatmap cell. `weight` is 0.0 for pairs with no stored entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub row: String,
    pub col: String,
    pub weight: f64,
}

/// Complete dense matrix plus the scale ceiling for the color range
///
/// `cells` covers the full cross product of `labels` in row-major order.
/// `max_weight` is the maximum *stored* weight, not the maximum over the
/// zero-filled grid, and is 0.0 when the source graph is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    pub labels: Vec<String>,
    pub cells: Vec<MatrixCell>,
    pub max_weight: f64,
}

impl DenseMatrix {
    /// Side length of the square matrix.
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }
}

/// Build the dense matrix with raw vertex ids as axis labels.
pub fn build_matrix(weighted: &WeightedGraph) -> DenseMatrix {
    let axis = weighted.row_vertices();
    let labels: Vec<String> = axis.iter().map(|v| v.as_str().to_string()).collect();
    fill(weighted, labels, &axis)
}

/// Build the dense matrix with display names as axis labels.
///
/// Ids missing from the name map keep their raw id string; the graph and
/// the card list are maintained independently and may drift.
pub fn build_named_matrix(weighted: &WeightedGraph, names: &NameMap) -> DenseMatrix {
    let axis = weighted.row_vertices();
    let labels: Vec<String> = axis
        .iter()
        .map(|v| match names.name_of(v) {
            Ok(name) => name.to_string(),
            Err(_) => v.as_str().to_string(),
        })
        .collect();
    fill(weighted, labels, &axis)
}

fn fill(weighted: &WeightedGraph, labels: Vec<String>, axis: &[VertexId]) -> DenseMatrix {
    let n = axis.len();
    let mut cells = Vec::with_capacity(n * n);
    for (i, row) in axis.iter().enumerate() {
        for (j, col) in axis.iter().enumerate() {
            cells.push(MatrixCell {
                row: labels[i].clone(),
                col: labels[j].clone(),
                weight: weighted.weight_between(row, col),
            });
        }
    }
    let max_weight = weighted.max_weight();
    debug!("Built {}x{} dense matrix, max weight {}", n, n, max_weight);
    DenseMatrix {
        labels,
        cells,
        max_weight,
    }
}
