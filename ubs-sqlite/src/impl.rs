//! Repository trait implementations for the SQLite database.

use crate::{Db, types::BookingId};
use ubs_core::ports::Repository;

mod booking;

impl Repository for Db {
    type Error = sqlx::Error;
    type BookingId = BookingId;
}
