use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::{
    problem::{entities::Problem, ports::ProblemService, value_objects::ProblemFilter},
    user::{services::resolve_reporter_ref, value_objects::ReporterRef},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProblemsByUserResponse {
    pub data: Vec<Problem>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/user/{user_ref}",
    tag = "problem",
    summary = "List problems reported by a user",
    description = "Accepts a canonical UUID or a legacy numeric user id",
    params(
        ("user_ref" = String, Path, description = "Reporter reference"),
    ),
    responses(
        (status = 200, body = GetProblemsByUserResponse)
    )
)]
pub async fn get_problems_by_user(
    Path(user_ref): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProblemsByUserResponse>, ApiError> {
    let reporter: ReporterRef = user_ref
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid reporter reference: {user_ref}")))?;

    let reported_by = resolve_reporter_ref(&state.service.user_repository, reporter)
        .await
        .map_err(ApiError::from)?;

    let problems = state
        .service
        .list_problems(ProblemFilter {
            reported_by: Some(reported_by),
            ..Default::default()
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProblemsByUserResponse {
        count: problems.len(),
        data: problems,
    }))
}
