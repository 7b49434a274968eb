mod booking;
pub use booking::{Booking, NewBooking};

mod datetime;
pub use datetime::{DateTime, DateTimeError, MILLIS_PER_DAY};

mod query;
pub use query::{BookingQuery, LowerBound};

mod stay;
pub use stay::{Stay, StayError};
