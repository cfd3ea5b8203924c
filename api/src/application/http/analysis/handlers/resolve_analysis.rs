use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::analysis::ports::ResolutionService;

#[utoipa::path(
    post,
    path = "/{problem_id}/resolve",
    tag = "analysis",
    summary = "Resolve a problem",
    description = "Atomically deletes the problem and its analysis record",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    responses(
        (status = 204)
    )
)]
pub async fn resolve_analysis(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .resolve(problem_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
