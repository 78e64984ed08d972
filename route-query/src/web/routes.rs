//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::domain::{InvalidId, StopId};
use crate::planner::{Planner, RouteQuery};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes/query", get(query_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Query routes between two stops.
async fn query_routes(
    State(state): State<AppState>,
    query: Result<Query<RouteQueryRequest>, QueryRejection>,
) -> Result<Json<RouteQueryResponse>, AppError> {
    let Query(req) = query?;
    let start = StopId::parse(&req.start)?;
    let end = StopId::parse(&req.end)?;

    // An empty avoid parameter means no stop to avoid
    let avoid = req
        .avoid
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .map(StopId::parse)
        .transpose()?;

    let planner = Planner::new(&state.network, &state.config);
    let result = planner.query(&RouteQuery::new(start, end, avoid));

    Ok(Json(RouteQueryResponse::from(result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidId> for AppError {
    fn from(e: InvalidId) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
