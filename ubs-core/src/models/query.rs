use super::DateTime;

/// A lower bound on a datetime column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowerBound {
    /// The column must be greater than or equal to the value
    Inclusive(DateTime),
    /// The column must be strictly greater than the value
    Exclusive(DateTime),
}

/// A conjunction of predicates over the stored bookings.
///
/// Every `None` predicate matches everything, so `BookingQuery::default()`
/// selects every booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuery<BookingId> {
    /// Only bookings for this guest
    pub guest_name: Option<String>,
    /// Only bookings for this unit
    pub unit_id: Option<String>,
    /// Only bookings whose check-in date is on or before this instant
    pub check_in_until: Option<DateTime>,
    /// Only bookings whose checkout date satisfies this bound
    pub checkout_from: Option<LowerBound>,
    /// Every booking except this one
    pub exclude_id: Option<BookingId>,
}

impl<BookingId> Default for BookingQuery<BookingId> {
    fn default() -> Self {
        Self {
            guest_name: None,
            unit_id: None,
            check_in_until: None,
            checkout_from: None,
            exclude_id: None,
        }
    }
}
