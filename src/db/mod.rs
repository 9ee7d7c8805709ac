/// Database module for records-console
///
/// Handles all database operations using SQLite and sqlx.
/// One table, one connection, four statements.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
