use sqlx::Row;
use std::collections::HashMap;

use crate::db::DbPool;
use crate::models::{AlgorithmStats, GraphRecord, MatrixRecord, SortRecord, Stats};
use crate::Error;
use matrix_engine::Matrix;

/// A caller-owned handle to the record database.
///
/// Each operation acquires a connection from the pool for its own duration
/// and is fully committed before it returns.
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // ------------------------------------------------------------------
    // graphs
    // ------------------------------------------------------------------

    pub async fn save_graph(
        &self,
        name: &str,
        vertices: i64,
        edges: i64,
        matrix: &[Vec<i64>],
    ) -> Result<i64, Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let row = sqlx::query(
            "INSERT INTO graphs (name, vertices, edges, matrix, created_at)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(vertices)
        .bind(edges)
        .bind(serde_json::to_string(matrix)?)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.get("id");
        tracing::debug!(id, name, "graph saved");
        Ok(id)
    }

    pub async fn get_graph(&self, id: i64) -> Result<Option<GraphRecord>, Error> {
        let row = sqlx::query_as::<_, (i64, String, i64, i64, String, i64)>(
            "SELECT id, name, vertices, edges, matrix, created_at FROM graphs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(graph_from_row(row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_graphs(&self) -> Result<Vec<GraphRecord>, Error> {
        let rows = sqlx::query_as::<_, (i64, String, i64, i64, String, i64)>(
            "SELECT id, name, vertices, edges, matrix, created_at FROM graphs
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(graph_from_row).collect()
    }

    pub async fn delete_graph(&self, id: i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM graphs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // matrices
    // ------------------------------------------------------------------

    /// Persists an operand pair and, when present, the computed product.
    ///
    /// A missing product is stored as SQL `NULL` and round-trips as `None`;
    /// it is never conflated with an empty matrix.
    pub async fn save_matrices(
        &self,
        name: &str,
        matrix_a: &Matrix,
        matrix_b: &Matrix,
        result: Option<&Matrix>,
    ) -> Result<i64, Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let result_json = match result {
            Some(m) => Some(serde_json::to_string(m)?),
            None => None,
        };

        let row = sqlx::query(
            "INSERT INTO matrices (name, matrix_a, matrix_b, result, created_at)
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(serde_json::to_string(matrix_a)?)
        .bind(serde_json::to_string(matrix_b)?)
        .bind(result_json)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.get("id");
        tracing::debug!(id, name, "matrix pair saved");
        Ok(id)
    }

    pub async fn get_matrices(&self, id: i64) -> Result<Option<MatrixRecord>, Error> {
        let row = sqlx::query_as::<_, (i64, String, String, String, Option<String>, i64)>(
            "SELECT id, name, matrix_a, matrix_b, result, created_at FROM matrices WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(matrices_from_row(row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_matrices(&self) -> Result<Vec<MatrixRecord>, Error> {
        let rows = sqlx::query_as::<_, (i64, String, String, String, Option<String>, i64)>(
            "SELECT id, name, matrix_a, matrix_b, result, created_at FROM matrices
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(matrices_from_row).collect()
    }

    pub async fn delete_matrices(&self, id: i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM matrices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // sorts
    // ------------------------------------------------------------------

    /// Persists one sort run. `array_size` is derived from the input array.
    pub async fn save_sort(
        &self,
        name: &str,
        input_array: &[i64],
        algorithm: &str,
        sorted_array: &[i64],
        comparisons: i64,
        time_taken: f64,
    ) -> Result<i64, Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let row = sqlx::query(
            "INSERT INTO sorts (name, array_size, input_array, algorithm,
                                sorted_array, comparisons, time_taken, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(input_array.len() as i64)
        .bind(serde_json::to_string(input_array)?)
        .bind(algorithm)
        .bind(serde_json::to_string(sorted_array)?)
        .bind(comparisons)
        .bind(time_taken)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.get("id");
        tracing::debug!(id, name, algorithm, "sort run saved");
        Ok(id)
    }

    pub async fn get_sort(&self, id: i64) -> Result<Option<SortRecord>, Error> {
        let row = sqlx::query_as::<_, SortRow>(
            "SELECT id, name, array_size, input_array, algorithm,
                    sorted_array, comparisons, time_taken, created_at
             FROM sorts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(sort_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Lists sort runs newest first, optionally restricted to one algorithm.
    pub async fn list_sorts(&self, algorithm: Option<&str>) -> Result<Vec<SortRecord>, Error> {
        let rows = match algorithm {
            Some(algorithm) => {
                sqlx::query_as::<_, SortRow>(
                    "SELECT id, name, array_size, input_array, algorithm,
                            sorted_array, comparisons, time_taken, created_at
                     FROM sorts WHERE algorithm = ?
                     ORDER BY created_at DESC, id DESC",
                )
                .bind(algorithm)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SortRow>(
                    "SELECT id, name, array_size, input_array, algorithm,
                            sorted_array, comparisons, time_taken, created_at
                     FROM sorts ORDER BY created_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(sort_from_row).collect()
    }

    pub async fn delete_sort(&self, id: i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM sorts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // aggregates
    // ------------------------------------------------------------------

    pub async fn stats(&self) -> Result<Stats, Error> {
        let graphs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM graphs")
            .fetch_one(&self.pool)
            .await?;
        let matrices: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matrices")
            .fetch_one(&self.pool)
            .await?;
        let sorts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sorts")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, (String, f64, f64)>(
            "SELECT algorithm, AVG(time_taken), AVG(comparisons)
             FROM sorts GROUP BY algorithm",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut sort_stats = HashMap::new();
        for (algorithm, avg_time, avg_comparisons) in rows {
            sort_stats.insert(
                algorithm,
                AlgorithmStats {
                    avg_time,
                    avg_comparisons,
                },
            );
        }

        Ok(Stats {
            graphs,
            matrices,
            sorts,
            sort_stats,
        })
    }

    /// Deletes every record in every category, atomically.
    pub async fn clear_all(&self) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM graphs").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM matrices").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM sorts").execute(&mut *tx).await?;

        tx.commit().await?;
        tracing::info!("all records cleared");
        Ok(())
    }
}

type SortRow = (i64, String, i64, String, String, String, i64, f64, i64);

fn graph_from_row(row: (i64, String, i64, i64, String, i64)) -> Result<GraphRecord, Error> {
    let (id, name, vertices, edges, matrix, created_at) = row;
    Ok(GraphRecord {
        id,
        name,
        vertices,
        edges,
        matrix: serde_json::from_str(&matrix)?,
        created_at,
    })
}

fn matrices_from_row(
    row: (i64, String, String, String, Option<String>, i64),
) -> Result<MatrixRecord, Error> {
    let (id, name, matrix_a, matrix_b, result, created_at) = row;
    Ok(MatrixRecord {
        id,
        name,
        matrix_a: serde_json::from_str(&matrix_a)?,
        matrix_b: serde_json::from_str(&matrix_b)?,
        result: match result {
            Some(json) => Some(serde_json::from_str(&json)?),
            None => None,
        },
        created_at,
    })
}

fn sort_from_row(row: SortRow) -> Result<SortRecord, Error> {
    let (id, name, array_size, input_array, algorithm, sorted_array, comparisons, time_taken, created_at) =
        row;
    Ok(SortRecord {
        id,
        name,
        array_size,
        input_array: serde_json::from_str(&input_array)?,
        algorithm,
        sorted_array: serde_json::from_str(&sorted_array)?,
        comparisons,
        time_taken,
        created_at,
    })
}
