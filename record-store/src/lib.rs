//! SQLite-backed storage for algorithm experiment records.
//!
//! `record-store` persists three kinds of experiment snapshots — graphs,
//! matrix pairs (with an optional product), and sort runs — each keyed by an
//! auto-assigned id and a creation timestamp, listed newest first. It also
//! answers aggregate statistics (record counts, per-algorithm averages over
//! sort runs) and supports a bulk clear.
//!
//! The store is a caller-owned handle around an [`sqlx`] pool; there is no
//! process-wide database state. Matrices and arrays are serialized as JSON
//! text columns.
//!
//! # Example
//!
//! ```no_run
//! use record_store::{db, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::init_pool("sqlite:algolab.db").await?;
//!     let store = Store::new(pool);
//!
//!     let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//!     let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
//!     let id = store.save_matrices("demo", &a, &b, None).await?;
//!
//!     let record = store.get_matrices(id).await?;
//!     assert!(record.is_some());
//!     Ok(())
//! }
//! ```

pub mod db;
mod error;
mod models;
mod store;

pub use error::Error;
pub use models::{AlgorithmStats, GraphRecord, MatrixRecord, SortRecord, Stats};
pub use store::Store;
