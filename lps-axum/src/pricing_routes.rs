//! REST API endpoints for demand fitting and price optimization.
//!
//! Both endpoints are stateless: each request is validated, handed to the
//! application's fitter or optimizer, and the outcome assembled into the
//! corresponding response type.

use crate::ApiApplication;
use aide::axum::{ApiRouter, routing::post};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use lps_core::{
    models::{ErrorResponse, FitRequest, FitResponse, OptimizeRequest, OptimizeResponse},
    ports::{Application as _, Fitter as _, Optimizer as _},
};
use std::fmt::Display;
use tracing::{Level, event};

/// A failed request, answered with a status code and `{"error": ...}`
type Rejection = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, err: impl Display) -> Rejection {
    (status, Json(ErrorResponse::new(err)))
}

/// Creates a router with the pricing endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with("/fit", post(fit::<T>), |route| route.tag("pricing"))
        .api_route_with("/optimize", post(optimize::<T>), |route| {
            route.tag("pricing")
        })
}

/// Malformed or invalid bodies are reported as 422, except for a wrong content type
fn unprocessable(rejection: JsonRejection) -> Rejection {
    let status = match &rejection {
        JsonRejection::MissingJsonContentType(_) => rejection.status(),
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    event!(
        Level::INFO,
        status = status.as_u16(),
        err = rejection.body_text(),
        "rejected request body"
    );
    reject(status, rejection.body_text())
}

/// Fit a linear demand curve to price/quantity observations.
///
/// # Returns
///
/// - `200 OK`: The fitted coefficients, with `invalidSlope` set when demand
///   does not decrease with price
/// - `422 Unprocessable Entity`: A sample is invalid, or the samples do not
///   determine a line
async fn fit<T: ApiApplication>(
    State(app): State<T>,
    body: Result<Json<FitRequest>, JsonRejection>,
) -> Result<Json<FitResponse>, Rejection> {
    let Json(request) = body.map_err(unprocessable)?;

    let regression = app.fitter().fit(&request.data).map_err(|err| {
        event!(Level::INFO, err = err.to_string(), "unable to fit demand");
        reject(StatusCode::UNPROCESSABLE_ENTITY, err)
    })?;

    Ok(Json(FitResponse::from(regression)))
}

/// Find the profit-maximizing price within the admissible interval.
///
/// # Returns
///
/// - `200 OK`: The optimal price, its metrics and the derivation
/// - `422 Unprocessable Entity`: The demand coefficients, costs or price
///   interval are invalid
/// - `500 Internal Server Error`: The optimizer failed
async fn optimize<T: ApiApplication>(
    State(app): State<T>,
    body: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, Rejection> {
    let Json(request) = body.map_err(unprocessable)?;

    let (demand, cost) = request.validate().map_err(|err| {
        event!(Level::INFO, err = err.to_string(), "invalid optimize request");
        reject(StatusCode::UNPROCESSABLE_ENTITY, err)
    })?;

    let outcome = app.optimizer().optimize(&demand, &cost).map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        reject(StatusCode::INTERNAL_SERVER_ERROR, err)
    })?;

    Ok(Json(OptimizeResponse::from(outcome)))
}
