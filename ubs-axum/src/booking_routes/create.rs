use super::BookingRecord;
use crate::{ApiApplication, error::ApiError, shape::Shaped};
use axum::{Json, extract::State};
use ubs_core::{models::NewBooking, service};

/// Create a booking if the availability rules allow it.
///
/// # Returns
///
/// - `200 OK`: The stored booking, with its id and derived checkout date
/// - `400 Bad Request`: Malformed body, or the reason the booking was turned down
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn create_booking<T: ApiApplication>(
    State(app): State<T>,
    Shaped(booking): Shaped<NewBooking>,
) -> Result<Json<BookingRecord<T>>, ApiError> {
    service::create_booking(app.database(), booking)
        .await
        .map_err(ApiError::internal)?
        .map(Json)
        .map_err(ApiError::Rejected)
}
