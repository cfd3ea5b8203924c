use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::problem::{entities::Problem, ports::ProblemService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProblemResponse {
    pub data: Problem,
}

#[utoipa::path(
    get,
    path = "/{problem_id}",
    tag = "problem",
    summary = "Get a problem",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    responses(
        (status = 200, body = GetProblemResponse)
    )
)]
pub async fn get_problem(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProblemResponse>, ApiError> {
    let problem = state
        .service
        .get_problem(problem_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProblemResponse { data: problem }))
}
