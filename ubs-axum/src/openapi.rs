//! The `/docs` pages: a RapiDoc viewer and the OpenAPI document it renders.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

const VIEWER: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Unit Booking API</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js" integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json" render-style="read" show-header="false"></rapi-doc>
  </body>
</html>"#;

pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(viewer))
        .route("/api.json", get(document))
}

async fn viewer() -> impl IntoApiResponse {
    Html(VIEWER).into_response()
}

// The finished document is attached as an extension by `router`
async fn document(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Title, version and tags of the booking API document.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Unit Booking API")
        .summary("Book rental units by the night.")
        .description(
            "Bookings are created subject to the availability rules of their unit \
             and guest, and may later be extended by whole nights.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .tag(Tag {
            name: "booking".into(),
            description: Some("Creating, listing and extending bookings".into()),
            ..Default::default()
        })
}
