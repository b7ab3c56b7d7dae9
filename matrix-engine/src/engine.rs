//! Matrix generation and instrumented multiplication.

use rand::Rng;
use std::time::{Duration, Instant};

use crate::Error;

/// A square row-major matrix.
pub type Matrix = Vec<Vec<f64>>;

/// The outcome of an instrumented multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplication {
    /// The freshly allocated product matrix, owned by the caller.
    pub product: Matrix,
    /// Number of scalar multiply-accumulate steps executed. Exactly `n³`
    /// for an n×n input, independent of the values involved.
    pub operations: u64,
    /// Wall-clock duration of the multiplication loop only, measured with a
    /// monotonic clock. Validation and generation are excluded.
    pub elapsed: Duration,
}

/// Generates a `size`×`size` matrix of integers drawn uniformly from the
/// inclusive range `[low, high]` using the thread-local generator.
///
/// The conventional range for experiments is `[1, 10]`.
pub fn generate(size: usize, low: i64, high: i64) -> Result<Matrix, Error> {
    generate_with(&mut rand::thread_rng(), size, low, high)
}

/// Like [`generate`], but draws from a caller-supplied generator so runs can
/// be reproduced from a seed.
pub fn generate_with<R: Rng>(rng: &mut R, size: usize, low: i64, high: i64) -> Result<Matrix, Error> {
    if low > high {
        return Err(Error::InvalidArgument(format!(
            "empty range: low {} is greater than high {}",
            low, high
        )));
    }

    Ok((0..size)
        .map(|_| (0..size).map(|_| rng.gen_range(low..=high) as f64).collect())
        .collect())
}

/// Multiplies two square matrices of equal dimension with the classic
/// triple-nested loop, counting every accumulation step.
///
/// `a` and `b` are borrowed immutably and never modified. Accumulation is
/// plain left-to-right over `k`; there is no early exit and zeros are not
/// special-cased, so the count is fixed at `n³`. An empty pair of matrices
/// yields an empty product with zero operations.
///
/// Fails with [`Error::InvalidArgument`] when an operand has ragged rows and
/// with [`Error::DimensionMismatch`] when the operands are not square and of
/// equal size. Validation runs before the timer starts and no partial result
/// is produced on failure.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Multiplication, Error> {
    let (a_rows, a_cols) = dimensions(a)?;
    let (b_rows, b_cols) = dimensions(b)?;

    if a_rows != a_cols || b_rows != b_cols || a_cols != b_rows {
        return Err(Error::DimensionMismatch(a_rows, a_cols, b_rows, b_cols));
    }

    let n = a_rows;
    let mut operations = 0u64;

    let start = Instant::now();
    let mut product = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                product[i][j] += a[i][k] * b[k][j];
                operations += 1;
            }
        }
    }
    let elapsed = start.elapsed();

    Ok(Multiplication {
        product,
        operations,
        elapsed,
    })
}

/// Returns `(rows, cols)` for a well-formed matrix, where every row has the
/// same length as the first.
fn dimensions(m: &Matrix) -> Result<(usize, usize), Error> {
    let cols = m.first().map_or(0, |row| row.len());
    for (i, row) in m.iter().enumerate() {
        if row.len() != cols {
            return Err(Error::InvalidArgument(format!(
                "ragged matrix: row {} has {} elements, expected {}",
                i,
                row.len(),
                cols
            )));
        }
    }
    Ok((m.len(), cols))
}
