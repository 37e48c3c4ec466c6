//! The OpenAPI document of the pricing API and the pages that present it.
//!
//! `/docs` renders the document with RapiDoc, configured to open on the
//! pricing operations with a try-it console; `/docs/api.json` is the raw
//! document.

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

const RAPIDOC_VERSION: &str = "9.3.8";
const RAPIDOC_INTEGRITY: &str = "sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g==";

/// Routes for the documentation pages, nested under `/docs`.
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(pricing_explorer))
        .route("/api.json", get(api_document))
}

/// An interactive explorer for the fit and optimize operations
async fn pricing_explorer() -> impl IntoApiResponse {
    Html(format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Linear Pricing API</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/{RAPIDOC_VERSION}/rapidoc-min.js" integrity="{RAPIDOC_INTEGRITY}" crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        heading-text="Linear Pricing API"
        render-style="focused"
        schema-style="table"
        default-schema-tab="example"
        allow-try="true"
        show-method-in-nav-bar="as-colored-text"
    ></rapi-doc>
  </body>
</html>"#
    ))
    .into_response()
}

/// The generated OpenAPI document
async fn api_document(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Title, summary and tags of the OpenAPI document.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Linear Pricing API")
        .summary("Optimal pricing under linear demand.")
        .description("Fit a linear demand curve q(p) = α − β·p to observed sales, and find the price maximizing (p − c)·q(p) − F within an admissible interval, together with the derivation of the optimum.")
        .version(env!("CARGO_PKG_VERSION"))
        .tag(Tag {
            name: "pricing".into(),
            description: Some("Demand estimation and price optimization".into()),
            ..Default::default()
        })
}
