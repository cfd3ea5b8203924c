use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::problem::ports::ProblemService;

#[utoipa::path(
    delete,
    path = "/{problem_id}",
    tag = "problem",
    summary = "Delete a problem",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    responses(
        (status = 204)
    )
)]
pub async fn delete_problem(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_problem(problem_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
