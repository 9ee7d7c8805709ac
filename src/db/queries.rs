/// SQL query functions for database operations
///
/// Every value is bound, never formatted into the SQL text.

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;

impl Database {
    /// Insert a new record
    ///
    /// # Arguments
    /// * `name` - Name to store
    ///
    /// # Returns
    /// * `Ok(i64)` - The id SQLite assigned
    /// * `Err(RecordsError)` - If the insert fails; nothing is stored
    pub async fn create(&self, name: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO Records (name) VALUES (?)")
            .bind(name)
            .execute(self.pool())
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted record {}", id);

        Ok(id)
    }

    /// Get every record in storage order
    ///
    /// No ORDER BY on purpose: SQLite hands rows back in rowid order, which
    /// is insertion order for an AUTOINCREMENT key.
    pub async fn list_all(&self) -> Result<Vec<Record>> {
        let records = sqlx::query_as::<_, Record>("SELECT id, name FROM Records")
            .fetch_all(self.pool())
            .await?;

        tracing::debug!("Loaded {} record(s)", records.len());

        Ok(records)
    }

    /// Rename a record
    ///
    /// Returns the number of rows touched. An unknown id is not an error,
    /// it just touches zero rows.
    pub async fn update(&self, id: i64, name: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE Records SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool())
            .await?;

        tracing::debug!("Updated record {} ({} row(s))", id, result.rows_affected());

        Ok(result.rows_affected())
    }

    /// Delete a record
    ///
    /// Same zero-row behaviour as `update` for unknown ids.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Records WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        tracing::debug!("Deleted record {} ({} row(s))", id, result.rows_affected());

        Ok(result.rows_affected())
    }
}
