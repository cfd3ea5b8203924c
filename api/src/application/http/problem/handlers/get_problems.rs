use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use civitas_core::domain::problem::{
    entities::{Problem, ProblemStatus},
    ports::ProblemService,
    value_objects::ProblemFilter,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct GetProblemsQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub reported_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    /// Sort string like `-created_at` or `category,created_at`.
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProblemsResponse {
    pub data: Vec<Problem>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "problem",
    summary = "List problems",
    description = "Lists problems with filtering, sorting, and pagination",
    params(GetProblemsQuery),
    responses(
        (status = 200, body = GetProblemsResponse)
    )
)]
pub async fn get_problems(
    State(state): State<AppState>,
    Query(query): Query<GetProblemsQuery>,
) -> Result<Response<GetProblemsResponse>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ProblemStatus>)
        .transpose()
        .map_err(ApiError::from)?;

    let problems = state
        .service
        .list_problems(ProblemFilter {
            status,
            category: query.category,
            reported_by: query.reported_by,
            assigned_to: query.assigned_to,
            sort: query.sort,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProblemsResponse {
        count: problems.len(),
        data: problems,
    }))
}
