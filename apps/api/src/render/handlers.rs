use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::models::template::templates_in;
use crate::models::{TemplateCategory, TemplateId, TemplateInfo};
use crate::render::{plan_for, render_html, RenderPlan};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<TemplateCategory>,
}

#[derive(Deserialize)]
pub struct TemplateQuery {
    pub template: Option<TemplateId>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    Query(params): Query<CategoryQuery>,
) -> Json<Vec<&'static TemplateInfo>> {
    Json(templates_in(params.category))
}

/// GET /api/v1/resume/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Json<RenderPlan> {
    let store = state.store.read().await;
    Json(plan_for(store.state(), params.template))
}

/// GET /api/v1/resume/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<TemplateQuery>,
) -> Html<String> {
    let store = state.store.read().await;
    Html(render_html(store.state(), params.template))
}
