use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    problem::validators::UpdateProblemStatusValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use civitas_core::domain::problem::{entities::Problem, ports::ProblemService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProblemStatusResponse {
    pub data: Problem,
}

#[utoipa::path(
    put,
    path = "/{problem_id}/status",
    tag = "problem",
    summary = "Update a problem's status",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    request_body = UpdateProblemStatusValidator,
    responses(
        (status = 200, body = UpdateProblemStatusResponse)
    )
)]
pub async fn update_problem_status(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProblemStatusValidator>,
) -> Result<Response<UpdateProblemStatusResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let status = payload.status.parse().map_err(ApiError::from)?;

    let updated = state
        .service
        .update_problem_status(problem_id, status)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProblemStatusResponse { data: updated }))
}
