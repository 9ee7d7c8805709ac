/// Error types for records-console
///
/// Every storage operation returns one of these instead of panicking,
/// so the console can report the failure and keep going.

use thiserror::Error;

/// Main error type for records-console operations
#[derive(Error, Debug)]
pub enum RecordsError {
    /// Anything the SQLite engine reports (I/O, constraint, connection)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (database directory, console reads and writes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user typed something that isn't a record id
    #[error("Invalid id: {0:?}")]
    InvalidId(String),
}

/// Result type alias for records-console operations
pub type Result<T> = std::result::Result<T, RecordsError>;
