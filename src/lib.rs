// EntreSupport - startup idea analysis demo: workflow engine, demo service and terminal UI

pub mod config;
pub mod fixture;
pub mod landing;
pub mod models;
pub mod routes;
pub mod source;
pub mod tui;       // Terminal User Interface
pub mod types;
pub mod utils;
pub mod workflow;  // Analysis workflow: progress simulation, message log, rendering

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use workflow::AnalysisWorkflow;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
