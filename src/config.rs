/// Runtime configuration
///
/// There are no flags or environment variables; the binary just uses the
/// defaults. Tests and embedders build their own `Config`.

use std::path::{Path, PathBuf};

/// Where the database lives unless told otherwise
pub const DEFAULT_DB_PATH: &str = "database.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
