//! Where bookings are stored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The booking database. Without a `database_path` bookings are kept in memory
/// and lost when the process exits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    pub database_path: Option<PathBuf>,

    /// Create the database file on first open instead of failing
    #[serde(default = "create_by_default")]
    pub create_if_missing: bool,
}

fn create_by_default() -> bool {
    true
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: create_by_default(),
        }
    }
}
