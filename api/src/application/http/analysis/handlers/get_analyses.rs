use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::analysis::{
    ports::AnalysisQueryService, value_objects::AnalysisRecordWithProblem,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetAnalysesResponse {
    pub data: Vec<AnalysisRecordWithProblem>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "analysis",
    summary = "List analysis records",
    description = "All analysis records together with the problems they belong to",
    responses(
        (status = 200, body = GetAnalysesResponse)
    )
)]
pub async fn get_analyses(
    State(state): State<AppState>,
) -> Result<Response<GetAnalysesResponse>, ApiError> {
    let records = state
        .service
        .list_analyses()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysesResponse {
        count: records.len(),
        data: records,
    }))
}
