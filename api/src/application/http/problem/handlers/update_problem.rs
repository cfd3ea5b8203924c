use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::{
    problem::validators::UpdateProblemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use civitas_core::domain::problem::{
    entities::Problem, ports::ProblemService, value_objects::UpdateProblemInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProblemResponse {
    pub data: Problem,
}

#[utoipa::path(
    put,
    path = "/{problem_id}",
    tag = "problem",
    summary = "Update a problem",
    params(
        ("problem_id" = Uuid, Path, description = "Problem id"),
    ),
    request_body = UpdateProblemValidator,
    responses(
        (status = 200, body = UpdateProblemResponse)
    )
)]
pub async fn update_problem(
    Path(problem_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProblemValidator>,
) -> Result<Response<UpdateProblemResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let status = payload
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(ApiError::from)?;

    let updated = state
        .service
        .update_problem(
            problem_id,
            UpdateProblemInput {
                title: payload.title,
                description: payload.description,
                location: payload.location,
                latitude: payload.latitude,
                longitude: payload.longitude,
                category: payload.category,
                status,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProblemResponse { data: updated }))
}
