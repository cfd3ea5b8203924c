use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::problem::{
    entities::Problem, ports::ProblemService, value_objects::ProblemFilter,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetAssignedProblemsResponse {
    pub data: Vec<Problem>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/assigned/{user_id}",
    tag = "problem",
    summary = "List problems assigned to an employee",
    params(
        ("user_id" = Uuid, Path, description = "Assignee id"),
    ),
    responses(
        (status = 200, body = GetAssignedProblemsResponse)
    )
)]
pub async fn get_assigned_problems(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetAssignedProblemsResponse>, ApiError> {
    let problems = state
        .service
        .list_problems(ProblemFilter {
            assigned_to: Some(user_id),
            ..Default::default()
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAssignedProblemsResponse {
        count: problems.len(),
        data: problems,
    }))
}
