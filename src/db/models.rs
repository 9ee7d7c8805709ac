/// Data models for database entities

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A stored record. `id` comes from SQLite's AUTOINCREMENT and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// This is the exact line format the console prints when listing
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id: {}, Name: {}", self.id, self.name)
    }
}
