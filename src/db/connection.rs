/// Database connection management
///
/// Owns the single connection to the records file for the whole run.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};

/// The console never has more than one statement in flight
const MAX_CONNECTIONS: u32 = 1;

/// Schema applied to a freshly created database file
const SCHEMA: &str = include_str!("../../database/schema.sql");

/// Database handle. Owned by whoever drives it; there is no global instance.
pub struct Database {
    pool: SqlitePool,
    db_path: PathBuf,
    created: bool,
}

impl Database {
    /// Open the database at `db_path`, creating it if needed
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Connected, with the `Records` table in place
    /// * `Err(RecordsError)` - If the file can't be created or opened
    ///
    /// The schema only runs when the file did not exist beforehand. An
    /// existing file is trusted to already have the right table.
    ///
    /// # Examples
    /// ```no_run
    /// use records_console_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("database.db").await?;
    /// db.close().await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();
        let created = !db_path.exists();

        if created {
            // Create parent directory if it doesn't exist
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = Self::single_connection_pool()
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            db_path,
            created,
        };

        if created {
            db.initialize_schema().await?;
            tracing::info!("Created database at {}", db.db_path.display());
        } else {
            tracing::debug!("Opened existing database at {}", db.db_path.display());
        }

        Ok(db)
    }

    /// Create a test database in memory
    ///
    /// Used for testing. Creates a fresh database for each test.
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = Self::single_connection_pool()
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            db_path: PathBuf::from(":memory:"),
            created: true,
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    // Keep the one connection alive for the whole run. An in-memory database
    // would vanish if the pool recycled it.
    fn single_connection_pool() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .idle_timeout(None)
            .max_lifetime(None)
    }

    /// Run the bundled schema
    async fn initialize_schema(&self) -> Result<()> {
        // sqlx executes one statement per query, so split on ';'
        for statement in SCHEMA.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(&self.pool).await?;
            }
        }

        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Whether this run created the file (and therefore the schema)
    pub fn was_created(&self) -> bool {
        self.created
    }

    /// Release the connection
    ///
    /// Takes `self` so it can only happen once.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Closed database at {}", self.db_path.display());
    }
}
