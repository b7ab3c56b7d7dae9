//! Error types for matrix-engine operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
