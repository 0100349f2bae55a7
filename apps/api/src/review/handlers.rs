use axum::{
    extract::{Path, State},
    Json,
};

use crate::review::score::{score_resume, ResumeScore};
use crate::review::validation::{validate_step, StepValidation};
use crate::state::AppState;

/// GET /api/v1/resume/score
pub async fn handle_score(State(state): State<AppState>) -> Json<ResumeScore> {
    let store = state.store.read().await;
    Json(score_resume(&store.state().document, &state.score_rules))
}

/// GET /api/v1/resume/steps/:step
pub async fn handle_validate_step(
    State(state): State<AppState>,
    Path(step): Path<usize>,
) -> Json<StepValidation> {
    let store = state.store.read().await;
    Json(validate_step(step, &store.state().document))
}
