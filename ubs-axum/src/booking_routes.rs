//! REST API endpoints for booking operations.
//!
//! Bookings are listed, created subject to the availability rules, and
//! extended by a number of nights. Each route answers both with and without a
//! trailing slash; only the canonical form appears in the OpenAPI document.

use crate::{
    ApiApplication,
    error::{ApiError, ApiResponse},
    shape::Issue,
};
use aide::{
    OperationInput,
    axum::{
        ApiRouter,
        routing::{get, get_with, patch, patch_with},
    },
    generate::GenContext,
    openapi::Operation,
    transform::TransformOperation,
};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::str::FromStr;
use ubs_core::{
    models::Booking,
    ports::{Application, Repository},
};

mod create;
use create::*;

mod extend;
use extend::*;

mod list;
use list::*;

/// Path parameter for booking-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
#[schemars(inline)]
struct Id {
    /// The unique identifier of the booking
    id: String,
}

/// The booking id from the path, parsed into the repository's id type.
///
/// A segment that cannot be decoded or parsed is a shape error on `id`.
struct BookingPath<I>(I);

impl<S: Send + Sync, I: FromStr + Send> FromRequestParts<S> for BookingPath<I> {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(Id { id }) = Path::<Id>::from_request_parts(parts, state)
            .await
            .map_err(|err| ApiError::shape(err.body_text(), &["id"]))?;
        id.parse()
            .map(BookingPath)
            .map_err(|_| ApiError::shape("Invalid booking id", &["id"]))
    }
}

impl<I> OperationInput for BookingPath<I> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Path::<Id>::operation_input(ctx, operation);
    }
}

/// The bodies a create may be turned down with: the shape envelope, or the
/// bare availability reason.
#[derive(schemars::JsonSchema)]
#[schemars(untagged)]
#[allow(dead_code)]
enum CreateRefusal {
    Shape(ApiResponse<Vec<Issue>>),
    Rejected(String),
}

/// A booking as stored by the application's repository.
type BookingRecord<T> = Booking<<<T as Application>::Repository as Repository>::BookingId>;

/// Creates a router with booking-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/api/v1/booking/",
            get_with(list_bookings::<T>, list_bookings_docs)
                .post_with(create_booking::<T>, create_booking_docs),
            |route| route.tag("booking"),
        )
        .api_route_with(
            "/api/v1/booking/{id}",
            patch_with(extend_booking::<T>, extend_booking_docs),
            |route| route.tag("booking"),
        )
        .route(
            "/api/v1/booking",
            get(list_bookings::<T>).post(create_booking::<T>),
        )
        .route("/api/v1/booking/{id}/", patch(extend_booking::<T>))
}

fn list_bookings_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List bookings")
        .description("Every booking, in the order they were created.")
        .response_with::<500, Json<ApiResponse<()>>, _>(|res| {
            res.description("Database query failed")
        })
}

fn create_booking_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Create booking")
        .description(
            r#"
            Book a unit for a guest. The checkout date is derived from the
            check-in date and the number of nights; any supplied value is ignored.

            The booking is turned down if the guest already booked this unit,
            if the guest already booked any unit, or if the check-in date falls
            within an existing booking of the unit. The reason is then returned
            as a bare JSON string with status 400.
            "#,
        )
        .response_with::<400, Json<CreateRefusal>, _>(|res| {
            res.description(
                "Malformed request body, as an envelope listing each issue; \
                 or the booking was turned down, as a bare string",
            )
        })
        .response_with::<500, Json<ApiResponse<()>>, _>(|res| {
            res.description("Database operation failed")
        })
}

fn extend_booking_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Extend booking")
        .description(
            r#"
            Add `extendBy` nights to an existing booking, moving its checkout
            date later. The extension is turned down if the new checkout date
            falls within another booking of the same unit.
            "#,
        )
        .response_with::<400, Json<ApiResponse<Vec<Issue>>>, _>(|res| {
            res.description("Malformed request, or the extension was turned down")
        })
        .response_with::<404, Json<ApiResponse<()>>, _>(|res| res.description("Booking not found"))
        .response_with::<500, Json<ApiResponse<()>>, _>(|res| {
            res.description("Database operation failed")
        })
}
