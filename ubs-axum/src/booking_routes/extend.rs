use super::{BookingPath, BookingRecord};
use crate::{
    ApiApplication,
    error::{ApiError, ApiResponse},
    shape::{ExtendRequest, Shaped},
};
use axum::{Json, extract::State};
use ubs_core::{
    ports::Repository,
    service::{self, ExtendFailure},
};

/// Lengthen an existing booking.
///
/// # Returns
///
/// - `200 OK`: The updated booking, in the response envelope
/// - `400 Bad Request`: Malformed id or body, or the extension was turned down
/// - `404 Not Found`: No booking has this id
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn extend_booking<T: ApiApplication>(
    State(app): State<T>,
    BookingPath(booking_id): BookingPath<<T::Repository as Repository>::BookingId>,
    Shaped(request): Shaped<ExtendRequest>,
) -> Result<Json<ApiResponse<BookingRecord<T>>>, ApiError> {
    let outcome = service::extend_booking(app.database(), booking_id, request.extend_by)
        .await
        .map_err(ApiError::internal)?;

    match outcome {
        Ok(booking) => Ok(Json(ApiResponse::ok(booking))),
        Err(failure @ ExtendFailure::NotFound) => Err(ApiError::NotFound(failure.to_string())),
        Err(ExtendFailure::Invalid(err)) => Err(ApiError::shape(err.to_string(), &["extendBy"])),
        Err(ExtendFailure::Rejected(rejection)) => Err(ApiError::BadRequest(rejection.to_string())),
    }
}
