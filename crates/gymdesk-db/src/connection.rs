use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};

use crate::schema;

const MAX_CONNECTIONS: u32 = 5;

/// A handle to the database, passed to every operation.
///
/// Each operation acquires one connection from the pool and
/// returns it when done, whether the statement succeeded or not.
#[derive(Debug, Clone)]
pub struct Connection {
    pool: SqlitePool,
}

impl Connection {
    /// Open a connection pool to an existing database
    pub async fn open(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(filename)?.foreign_keys(true);
        Self::connect(opts).await
    }

    /// Open a connection pool, creating the database file when missing
    pub async fn create(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(filename)?
            .create_if_missing(true)
            .foreign_keys(true);
        Self::connect(opts).await
    }

    async fn connect(opts: SqliteConnectOptions) -> Result<Self> {
        tracing::debug!(filename = ?opts.get_filename(), "opening database");
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    /// Check out a connection for a single statement
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Removes the test database file when dropped
pub struct TestHandle {
    filename: String,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        let path = Path::new(&self.filename);
        if path.exists() {
            let _ = fs::remove_file(path);
        }
    }
}

/// Open a new test database connection.
/// The database will be created on each open.
pub async fn open_test() -> (TestHandle, Connection) {
    let filename = std::env::temp_dir()
        .join(format!("gymdesk_test_{}.sqlite3", rand::random::<u64>()))
        .to_string_lossy()
        .into_owned();
    let handle = TestHandle {
        filename: filename.clone(),
    };

    let db = Connection::create(&filename).await.unwrap();

    // Install the schema
    schema::install(&db).await.unwrap();

    (handle, db)
}
