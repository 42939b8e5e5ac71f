//! Durable tally backend on SQLite.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use emojivoto_core::VoteCount;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use tracing::{debug, error, info};

use super::TallyBackend;
use crate::error::TallyError;

const SCHEMA_SQL: &str = "DROP TABLE IF EXISTS votes;
CREATE TABLE votes (
    code TEXT NOT NULL UNIQUE,
    count INTEGER NOT NULL
);";

// Single statement, so concurrent voters on one code cannot lose updates.
const UPSERT_SQL: &str = "INSERT INTO votes (code, count) VALUES (?1, 1)
ON CONFLICT(code) DO UPDATE SET count = count + 1
RETURNING count";

const SELECT_ALL_SQL: &str = "SELECT code, count FROM votes";

/// Vote counters stored in a SQLite `votes` table.
///
/// Statements run on tokio's blocking pool; the connection itself is
/// serialized behind a mutex.
pub struct SqliteTally {
    conn: Arc<Mutex<Connection>>,
    location: String,
}

impl SqliteTally {
    /// Prepares a fresh database at `path`.
    ///
    /// This is destructive: any existing database file is removed and
    /// recreated with an empty `votes` table. Intended to run once at
    /// startup; failures should halt the service.
    pub fn bootstrap(path: impl AsRef<Path>) -> Result<Self, TallyError> {
        let path = path.as_ref();
        let started_at = Instant::now();

        if path.exists() {
            info!("Dropping existing database at {}", path.display());
            std::fs::remove_file(path)?;
        }

        let conn = Connection::open(path).map_err(|e| {
            error!("Failed to open database {}: {}", path.display(), e);
            TallyError::bootstrap(format!("cannot open {}: {}", path.display(), e))
        })?;

        let tally = Self::prepare(conn, path.display().to_string())?;
        info!(
            "Database {} ready in {}ms",
            tally.location,
            started_at.elapsed().as_millis()
        );

        Ok(tally)
    }

    /// Creates a tally on a private in-memory database.
    pub fn in_memory() -> Result<Self, TallyError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| TallyError::bootstrap(format!("cannot open in-memory database: {e}")))?;

        Self::prepare(conn, ":memory:".to_string())
    }

    fn prepare(conn: Connection, location: String) -> Result<Self, TallyError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| TallyError::bootstrap(format!("cannot create votes table: {e}")))?;

        info!("Successfully created new table - votes");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            location,
        })
    }

    /// Returns where the database lives (file path or `:memory:`).
    pub fn location(&self) -> &str {
        &self.location
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, TallyError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, TallyError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock();
            f(&conn)
        })
        .await?
    }
}

fn to_count(value: i64) -> Result<u64, TallyError> {
    u64::try_from(value)
        .map_err(|_| TallyError::Storage(rusqlite::Error::IntegralValueOutOfRange(1, value)))
}

#[async_trait]
impl TallyBackend for SqliteTally {
    async fn increment(&self, choice: &str) -> Result<u64, TallyError> {
        let choice = choice.to_string();

        self.with_connection(move |conn| {
            let mut stmt = conn.prepare_cached(UPSERT_SQL)?;
            let total: i64 = stmt.query_row(params![choice], |row| row.get(0))?;
            to_count(total)
        })
        .await
    }

    async fn snapshot(&self) -> Result<Vec<VoteCount>, TallyError> {
        let counts = self
            .with_connection(|conn| {
                let mut stmt = conn.prepare_cached(SELECT_ALL_SQL)?;
                let rows = stmt.query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
                })?;

                let mut counts = Vec::new();
                for row in rows {
                    let (code, count) = row?;
                    counts.push(VoteCount::new(code, to_count(count)?));
                }
                Ok(counts)
            })
            .await?;

        debug!("Read {} rows from {}", counts.len(), self.location);
        Ok(counts)
    }

    fn name(&self) -> &str {
        "sqlite"
    }

    async fn health_check(&self) -> Result<(), TallyError> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
        .await
    }
}

impl std::fmt::Debug for SqliteTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTally")
            .field("location", &self.location)
            .finish()
    }
}
