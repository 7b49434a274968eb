#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the ubs-core crate.
//! [ubs_core]: https://docs.rs/ubs_core/latest/ubs_core/index.html
#![doc = include_str!("../README.md")]

mod booking_routes;
mod error;
mod shape;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Serialize;
use std::{str::FromStr, sync::Arc};
use tower_http::trace::TraceLayer;
use ubs_core::ports::{Application, Repository};

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    message: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "OK".to_string(),
    })
}

/// Construct a full API router with the given state, along with the OpenAPI
/// document describing it
pub fn router<T: ApiApplication>(state: T) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/", get(health_check))
        .merge(booking_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    // Arc is very important here or you will face massive memory and performance issues
    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let (service, _) = router(app);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<
        Repository: Send
                        + Sync
                        + 'static
                        + Repository<BookingId: FromStr + Serialize + JsonSchema + Send + Sync>,
    >
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            Repository: Send
                            + Sync
                            + 'static
                            + Repository<BookingId: FromStr + Serialize + JsonSchema + Send + Sync>,
        >
{
}
