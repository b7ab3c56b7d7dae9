use matrix_engine::Matrix;
use std::collections::HashMap;

/// A persisted graph snapshot: vertex and edge counts plus the adjacency
/// matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRecord {
    pub id: i64,
    pub name: String,
    pub vertices: i64,
    pub edges: i64,
    pub matrix: Vec<Vec<i64>>,
    pub created_at: i64,
}

/// A persisted matrix-multiplication experiment.
///
/// `result` is `None` when no product was computed for the pair. An empty
/// product matrix is a distinct, legal value.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRecord {
    pub id: i64,
    pub name: String,
    pub matrix_a: Matrix,
    pub matrix_b: Matrix,
    pub result: Option<Matrix>,
    pub created_at: i64,
}

/// A persisted sort run: input, algorithm name, output, and measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct SortRecord {
    pub id: i64,
    pub name: String,
    pub array_size: i64,
    pub input_array: Vec<i64>,
    pub algorithm: String,
    pub sorted_array: Vec<i64>,
    pub comparisons: i64,
    pub time_taken: f64,
    pub created_at: i64,
}

/// Per-algorithm averages over all persisted sort runs.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmStats {
    pub avg_time: f64,
    pub avg_comparisons: f64,
}

/// Aggregate statistics over the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub graphs: i64,
    pub matrices: i64,
    pub sorts: i64,
    pub sort_stats: HashMap<String, AlgorithmStats>,
}
