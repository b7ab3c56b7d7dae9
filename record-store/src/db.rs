use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{Sqlite, SqlitePool, SqlitePoolOptions},
    Pool,
};

pub type DbPool = Pool<Sqlite>;

pub async fn ensure_database_file(url: &str) -> Result<(), sqlx::Error> {
    let exists = Sqlite::database_exists(url).await?;

    if !exists {
        Sqlite::create_database(url).await?;
    }

    Ok(())
}

/// Opens a pool on `url`, creating the database file and the schema when
/// they do not exist yet.
pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    ensure_database_file(database_url).await?;
    let pool = SqlitePool::connect(database_url).await?;
    create_tables(&pool).await?;

    tracing::debug!(url = database_url, "database ready");
    Ok(pool)
}

/// Opens an in-memory pool for tests and throwaway runs.
///
/// A `:memory:` SQLite database is private to its connection, so the pool is
/// capped at a single connection.
pub async fn init_memory_pool() -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_tables(&pool).await?;

    Ok(pool)
}

async fn create_tables(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS graphs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            vertices INTEGER NOT NULL,
            edges INTEGER NOT NULL,
            matrix TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matrices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            matrix_a TEXT NOT NULL,
            matrix_b TEXT NOT NULL,
            result TEXT,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sorts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            array_size INTEGER NOT NULL,
            input_array TEXT NOT NULL,
            algorithm TEXT NOT NULL,
            sorted_array TEXT NOT NULL,
            comparisons INTEGER NOT NULL,
            time_taken REAL NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
