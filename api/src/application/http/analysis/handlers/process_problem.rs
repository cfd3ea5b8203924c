use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::analysis::{entities::AnalysisRecord, ports::EnrichmentService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessProblemResponse {
    pub data: AnalysisRecord,
}

#[utoipa::path(
    post,
    path = "/process/{problem_id}",
    tag = "analysis",
    summary = "Analyze a problem's media now",
    description = "Runs the enrichment pipeline synchronously for one problem",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    responses(
        (status = 200, body = ProcessProblemResponse)
    )
)]
pub async fn process_problem(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ProcessProblemResponse>, ApiError> {
    let record = state
        .service
        .enrich_one(problem_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessProblemResponse { data: record }))
}
