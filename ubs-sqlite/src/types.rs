//! Type definitions for the SQLite implementation.
//!
//! The public [`BookingId`] identifies stored bookings throughout the system.
//! The row type maps the `booking` table, whose dates are integer
//! milliseconds, back onto the core models.

use ubs_core::models::{Booking, DateTime, Stay};

mod ids;
pub use ids::BookingId;

/// The columns selected whenever a whole booking is read back.
pub(crate) const BOOKING_COLUMNS: &str =
    "id, guest_name, unit_id, check_in_date, number_of_nights, checkout_date";

#[derive(sqlx::FromRow)]
pub(crate) struct BookingRow {
    pub id: BookingId,
    pub guest_name: String,
    pub unit_id: String,
    pub check_in_date: i64,
    pub number_of_nights: i64,
    pub checkout_date: i64,
}

/// A stay flattened into its column values.
pub(crate) struct StayColumns {
    pub check_in_date: i64,
    pub number_of_nights: i64,
    pub checkout_date: i64,
}

impl From<Stay> for StayColumns {
    fn from(stay: Stay) -> Self {
        Self {
            check_in_date: stay.check_in_date().unix_millis(),
            number_of_nights: i64::from(stay.number_of_nights()),
            checkout_date: stay.checkout_date().unix_millis(),
        }
    }
}

/// A stored row that does not describe a valid stay.
#[derive(Debug, thiserror::Error)]
#[error("booking {id} has an inconsistent stay: {reason}")]
pub(crate) struct CorruptRow {
    id: BookingId,
    reason: String,
}

impl TryFrom<BookingRow> for Booking<BookingId> {
    type Error = sqlx::Error;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| sqlx::Error::Decode(Box::new(CorruptRow { id: row.id, reason }));

        let check_in_date =
            DateTime::from_unix_millis(row.check_in_date).map_err(|e| corrupt(e.to_string()))?;
        let nights = u32::try_from(row.number_of_nights)
            .map_err(|_| corrupt(format!("{} nights", row.number_of_nights)))?;
        let stay = Stay::new(check_in_date, nights).map_err(|e| corrupt(e.to_string()))?;

        if stay.checkout_date().unix_millis() != row.checkout_date {
            return Err(corrupt(format!(
                "checkout {}ms does not follow from the check-in date",
                row.checkout_date
            )));
        }

        Ok(Booking {
            id: row.id,
            guest_name: row.guest_name,
            unit_id: row.unit_id,
            stay,
        })
    }
}
