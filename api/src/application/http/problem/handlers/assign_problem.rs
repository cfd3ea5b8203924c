use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    problem::validators::AssignProblemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use civitas_core::domain::problem::{entities::Problem, ports::ProblemService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignProblemResponse {
    pub data: Problem,
}

#[utoipa::path(
    post,
    path = "/{problem_id}/assign",
    tag = "problem",
    summary = "Assign a problem to an employee",
    description = "Sets the assignee after verifying they are an active employee",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    request_body = AssignProblemValidator,
    responses(
        (status = 200, body = AssignProblemResponse)
    )
)]
pub async fn assign_problem(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<AssignProblemValidator>,
) -> Result<Response<AssignProblemResponse>, ApiError> {
    let assigned = state
        .service
        .assign_problem(problem_id, payload.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AssignProblemResponse { data: assigned }))
}
