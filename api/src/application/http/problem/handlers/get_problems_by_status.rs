use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::problem::{
    entities::{Problem, ProblemStatus},
    ports::ProblemService,
    value_objects::ProblemFilter,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProblemsByStatusResponse {
    pub data: Vec<Problem>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/status/{status}",
    tag = "problem",
    summary = "List problems in a given status",
    params(
        ("status" = String, Path, description = "Problem status"),
    ),
    responses(
        (status = 200, body = GetProblemsByStatusResponse)
    )
)]
pub async fn get_problems_by_status(
    Path(status): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProblemsByStatusResponse>, ApiError> {
    let status: ProblemStatus = status.parse().map_err(ApiError::from)?;

    let problems = state
        .service
        .list_problems(ProblemFilter {
            status: Some(status),
            ..Default::default()
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProblemsByStatusResponse {
        count: problems.len(),
        data: problems,
    }))
}
