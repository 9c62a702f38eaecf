//! Data API HTTP Routes
//!
//! The single data endpoint: one JSON request in, one JSON response or
//! one structured error out.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::api::ApiHandler;

/// Shared state for the data endpoint
pub struct DataState {
    pub handler: ApiHandler,
}

impl DataState {
    pub fn new(handler: ApiHandler) -> Self {
        Self { handler }
    }
}

/// Create the data API routes
pub fn data_routes(state: Arc<DataState>) -> Router {
    Router::new()
        .route("/v1/data", post(data_handler))
        .with_state(state)
}

/// Execute one data operation
///
/// The body is taken raw, not through the JSON extractor, so malformed
/// JSON flows through the same error contract as every other rejection.
async fn data_handler(State(state): State<Arc<DataState>>, body: String) -> Response {
    match state.handler.handle_raw(&body).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => err.into_response(),
    }
}
