//! API Routes
//!
//! - `/api/analyze` - Startup idea analysis
//! - `/api/landing` - Home page content
//! - `/api/health` - Health checks

pub mod analyze;
pub mod error;
pub mod health;
pub mod landing;

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::models::AppState;

pub use error::ApiError;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(analyze::router(state))
        .merge(landing::router())
        .merge(health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS restricted to the configured origins; `*` allows any
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
