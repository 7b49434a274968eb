use crate::models::{Booking, BookingQuery, NewBooking, Stay};

/// Repository interface for storing and querying bookings.
///
/// Both write operations take their dates as a [`Stay`], so an implementation
/// never sees a checkout date that was not derived from the check-in date and
/// the number of nights. Implementations are expected to persist the derived
/// checkout date alongside the other fields so that [`query_bookings`] can
/// filter on it.
///
/// None of these methods enforce the availability rules; callers are expected
/// to consult [`crate::engine`] before writing.
///
/// [`query_bookings`]: BookingRepository::query_bookings
pub trait BookingRepository: super::Repository + Sync {
    /// Insert a new booking, returning it with its assigned identifier.
    fn create_booking(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = Result<Booking<Self::BookingId>, Self::Error>> + Send;

    /// Replace the stay of an existing booking.
    ///
    /// # Returns
    ///
    /// - Ok(Some(booking)) with the updated booking if it exists
    /// - Ok(None) if no such booking exists
    /// - Err otherwise
    fn update_stay(
        &self,
        booking_id: Self::BookingId,
        stay: Stay,
    ) -> impl Future<Output = Result<Option<Booking<Self::BookingId>>, Self::Error>> + Send;

    /// Retrieve a booking, returning Option::None if it does not exist.
    fn get_booking(
        &self,
        booking_id: Self::BookingId,
    ) -> impl Future<Output = Result<Option<Booking<Self::BookingId>>, Self::Error>> + Send;

    /// Retrieve every booking matching all the predicates of `query`, ordered
    /// by identifier.
    fn query_bookings(
        &self,
        query: BookingQuery<Self::BookingId>,
    ) -> impl Future<Output = Result<Vec<Booking<Self::BookingId>>, Self::Error>> + Send;

    /// Remove every booking, returning how many were removed.
    ///
    /// This is an administrative operation intended for resetting test
    /// fixtures; the booking service itself never deletes anything.
    fn clear_bookings(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}
