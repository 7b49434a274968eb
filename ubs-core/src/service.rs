use crate::{
    engine::{self, Rejection},
    models::{Booking, NewBooking, StayError},
    ports::BookingRepository,
};
use tracing::{Level, event};

/// The ways an extension request may fail without the repository failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtendFailure {
    /// There is no booking with the requested identifier
    #[error("Booking not found")]
    NotFound,
    /// The extended stay cannot be represented
    #[error(transparent)]
    Invalid(#[from] StayError),
    /// The availability engine turned the extension down
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Create a booking if the availability engine accepts it.
///
/// # Returns
///
/// - Ok(Ok(booking)) with the stored booking if it was accepted
/// - Ok(Err(rejection)) if it was turned down; nothing is written
/// - Err(repository_error) if there is some other error
///
/// The check and the write are separate repository calls, so two concurrent
/// requests may both pass the check unless the repository serializes them.
pub async fn create_booking<R: BookingRepository>(
    db: &R,
    booking: NewBooking,
) -> Result<Result<Booking<R::BookingId>, Rejection>, R::Error> {
    if let Err(rejection) = engine::can_create(db, &booking).await?.into_result() {
        return Ok(Err(rejection));
    }

    let booking = db.create_booking(booking).await?;
    event!(
        Level::INFO,
        booking_id = %booking.id,
        unit_id = %booking.unit_id,
        "booking created"
    );
    Ok(Ok(booking))
}

/// Lengthen an existing booking by `nights` if the availability engine accepts
/// the new checkout date.
///
/// # Returns
///
/// - Ok(Ok(booking)) with the updated booking on success
/// - Ok(Err(failure)) if the booking does not exist or cannot be extended
/// - Err(repository_error) if there is some other error
pub async fn extend_booking<R: BookingRepository>(
    db: &R,
    booking_id: R::BookingId,
    nights: u32,
) -> Result<Result<Booking<R::BookingId>, ExtendFailure>, R::Error> {
    let Some(existing) = db.get_booking(booking_id.clone()).await? else {
        return Ok(Err(ExtendFailure::NotFound));
    };

    let stay = match existing.stay.extend(nights) {
        Ok(stay) => stay,
        Err(err) => return Ok(Err(err.into())),
    };
    let candidate = existing.with_stay(stay);

    let decision = engine::can_extend(db, &candidate, &booking_id).await?;
    if let Err(rejection) = decision.into_result() {
        return Ok(Err(rejection.into()));
    }

    // The booking may have vanished between the read and the write
    let updated = db.update_stay(booking_id, stay).await?;
    Ok(updated.ok_or(ExtendFailure::NotFound))
}
