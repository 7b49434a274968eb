//! The concrete application served by the demo.

use ubs_core::ports::Application;
use ubs_sqlite::Db;

/// Bookings stored in SQLite.
#[derive(Clone)]
pub struct DemoApp {
    /// Database connection for persistent storage
    pub db: Db,
}

impl Application for DemoApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }
}
