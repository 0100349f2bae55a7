pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers::{handle_ats_check, MULTIPART_OVERHEAD_BYTES};
use crate::export::handlers::handle_export;
use crate::render::handlers::{handle_layout, handle_list_templates, handle_preview};
use crate::resume::handlers::{
    handle_command, handle_get_resume, handle_reload, handle_replace_resume, handle_save,
};
use crate::review::handlers::{handle_score, handle_validate_step};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.ats_max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(handle_list_templates))
        // Resume session
        .route(
            "/api/v1/resume",
            get(handle_get_resume).put(handle_replace_resume),
        )
        .route("/api/v1/resume/commands", post(handle_command))
        .route("/api/v1/resume/save", post(handle_save))
        .route("/api/v1/resume/reload", post(handle_reload))
        // Review
        .route("/api/v1/resume/score", get(handle_score))
        .route("/api/v1/resume/steps/:step", get(handle_validate_step))
        // Rendering and export
        .route("/api/v1/resume/layout", get(handle_layout))
        .route("/api/v1/resume/preview", get(handle_preview))
        .route("/api/v1/resume/export", post(handle_export))
        // ATS check
        .route(
            "/api/v1/ats/check",
            post(handle_ats_check).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
