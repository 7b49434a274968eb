use super::BookingRecord;
use crate::{ApiApplication, error::ApiError};
use axum::{Json, extract::State};
use ubs_core::{models::BookingQuery, ports::BookingRepository as _};

pub(crate) async fn list_bookings<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<BookingRecord<T>>>, ApiError> {
    let bookings = app
        .database()
        .query_bookings(BookingQuery::default())
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(bookings))
}
