/// records-console library
///
/// Keeps `{id, name}` records in a single SQLite file behind a text menu.

pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use config::Config;
pub use crate::core::Console;
pub use db::{Database, Record};
pub use error::{RecordsError, Result};
