//! HTTP surface for the invoicing ROI estimator.
//!
//! Thin glue: routes deserialize and validate a body, call the pure engine,
//! touch the store once, and serialize the answer. CORS is wide open so the
//! browser form can call from any origin.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the router with all API routes and middleware over shared state.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().merge(routes::api_routes(state)).layer(cors)
}
