use axum::{routing::get, Json, Router};

use crate::landing::{landing_page, LandingPage};

pub fn router() -> Router {
    Router::new().route("/api/landing", get(get_landing))
}

/// GET /api/landing - static home page content
async fn get_landing() -> Json<LandingPage> {
    Json(landing_page())
}
