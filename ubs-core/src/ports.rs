mod booking;
pub use booking::BookingRepository;

/// Base repository trait defining the types shared by all the ports.
///
/// Implementations choose how bookings are identified and what their
/// failures look like; everything else is expressed in terms of the
/// models in [`crate::models`].
pub trait Repository {
    /// Failures of the underlying storage
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier assigned to a booking when it is created
    type BookingId: Clone + PartialEq + std::fmt::Display + Send + Sync + 'static;
}

/// The top-level trait an application implements to be served.
///
/// It ties together the storage implementation and anything else an
/// application needs to provide at runtime.
pub trait Application {
    /// The storage backend holding the bookings
    type Repository: BookingRepository;

    /// Get a handle to the repository
    fn database(&self) -> &Self::Repository;
}
