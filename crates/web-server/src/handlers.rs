use crate::error::AppError;
use crate::AppState;
use analytics::{kpi_context, DashboardSnapshot, FormulaNote, KpiEngine, FORMULAS};
use axum::{extract::State, Json};
use completion_client::{ask_about_kpis, ApiError};
use configuration::DefaultInputs;
use core_types::{CampaignInputs, GrowthInputs};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /api/kpis`. Omitting `growth` selects the basic variant.
#[derive(Debug, Deserialize)]
pub struct KpiRequest {
    pub campaign: CampaignInputs,
    pub growth: Option<GrowthInputs>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub campaign: CampaignInputs,
    pub growth: GrowthInputs,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Handler for `GET /api/defaults`.
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DefaultInputs> {
    Json(state.defaults.clone())
}

/// Handler for `GET /api/formulas`.
pub async fn get_formulas() -> Json<&'static [FormulaNote]> {
    Json(FORMULAS)
}

/// Handler for `POST /api/kpis`.
pub async fn compute_kpis(
    Json(request): Json<KpiRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let snapshot = KpiEngine::new().snapshot(&request.campaign, request.growth.as_ref())?;
    Ok(Json(snapshot))
}

/// Handler for `POST /api/ask`.
pub async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let context = kpi_context(&request.campaign, &request.growth)?;
    let assistant = state.assistant.as_ref().ok_or(ApiError::NotConfigured)?;

    let answer = ask_about_kpis(assistant.as_ref(), &context, &request.question).await?;

    Ok(Json(AskResponse { answer }))
}
