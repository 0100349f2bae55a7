use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::commands::{Command, ResumeState};
use crate::resume::store::ResumeStore;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    #[serde(flatten)]
    pub state: ResumeState,
    pub is_dirty: bool,
    pub last_saved: Option<DateTime<Utc>>,
}

impl From<&ResumeStore> for ResumeResponse {
    fn from(store: &ResumeStore) -> Self {
        Self {
            state: store.state().clone(),
            is_dirty: store.is_dirty(),
            last_saved: store.last_saved(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub restored: bool,
    #[serde(flatten)]
    pub resume: ResumeResponse,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeResponse> {
    let store = state.store.read().await;
    Json(ResumeResponse::from(&*store))
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(incoming): Json<ResumeState>,
) -> Result<Json<ResumeResponse>, AppError> {
    incoming.check_import()?;
    let mut store = state.store.write().await;
    store.replace(incoming);
    info!("Replaced resume from import");
    Ok(Json(ResumeResponse::from(&*store)))
}

/// POST /api/v1/resume/commands
pub async fn handle_command(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut store = state.store.write().await;
    store.dispatch(command)?;
    Ok(Json(ResumeResponse::from(&*store)))
}

/// POST /api/v1/resume/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveResponse>, AppError> {
    let mut store = state.store.write().await;
    let saved_at = store.save(state.kv.as_ref()).await?;
    Ok(Json(SaveResponse { saved_at }))
}

/// POST /api/v1/resume/reload
pub async fn handle_reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let mut store = state.store.write().await;
    let restored = store.reload(state.kv.as_ref()).await?;
    Ok(Json(ReloadResponse {
        restored,
        resume: ResumeResponse::from(&*store),
    }))
}
