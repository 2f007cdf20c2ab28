//! Derived views over the synergy graphs

pub mod matrix;
pub mod similarity;

pub use matrix::{build_matrix, build_named_matrix, DenseMatrix, MatrixCell};
pub use similarity::{similar_names, similar_vertices, SimilarityConfig};
