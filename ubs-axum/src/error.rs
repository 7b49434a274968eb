//! Failure responses and the response envelope.

use crate::shape::Issue;
use aide::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{Level, event};
use ubs_core::engine::Rejection;

/// The envelope wrapping most responses of the booking API.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Mirrors the HTTP status code
    pub status_code: u16,
    /// A human-readable summary
    pub message: String,
    /// The payload, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A 200 response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    fn failure(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data,
        }
    }
}

/// Everything a booking handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or path did not have the expected shape
    #[error("Data not in correct shape")]
    Shape(Vec<Issue>),
    /// A new booking was turned down; reported as a bare string
    #[error(transparent)]
    Rejected(Rejection),
    /// The request was understood but cannot be honored
    #[error("{0}")]
    BadRequest(String),
    /// The addressed booking does not exist
    #[error("{0}")]
    NotFound(String),
    /// Something unexpected went wrong; the details are only logged
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Log `err` and turn it into an opaque 500.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        event!(Level::ERROR, err = err.to_string());
        Self::Internal
    }

    /// A single shape issue at `path`.
    pub fn shape(message: impl Into<String>, path: &[&str]) -> Self {
        Self::Shape(vec![Issue::new(message, path)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            Self::Shape(issues) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::failure(
                    StatusCode::BAD_REQUEST,
                    message,
                    Some(issues),
                )),
            )
                .into_response(),
            Self::Rejected(_) => (StatusCode::BAD_REQUEST, Json(message)).into_response(),
            Self::BadRequest(_) => envelope(StatusCode::BAD_REQUEST, message),
            Self::NotFound(_) => envelope(StatusCode::NOT_FOUND, message),
            Self::Internal => envelope(StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }
}

fn envelope(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponse::<()>::failure(status, message, None))).into_response()
}

// The responses are documented per route instead
impl OperationOutput for ApiError {
    type Inner = Self;
}
