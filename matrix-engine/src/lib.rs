//! Instrumented reference matrix multiplication.
//!
//! `matrix-engine` computes the product of two square matrices with the
//! classic O(n³) triple loop and reports, alongside the product, the exact
//! number of multiply-accumulate steps executed and the wall-clock time the
//! loop took. The operation count is a clock-speed-independent proxy for
//! algorithmic cost: it is always `n³` for an n×n input.
//!
//! The engine is pure and synchronous. It never mutates its operands and
//! keeps no state across calls.
//!
//! # Example
//!
//! ```
//! use matrix_engine::multiply;
//!
//! # fn main() -> Result<(), matrix_engine::Error> {
//! let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
//!
//! let out = multiply(&a, &b)?;
//! assert_eq!(out.product, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//! assert_eq!(out.operations, 8);
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;

pub use engine::{generate, generate_with, multiply, Matrix, Multiplication};
pub use error::Error;
