use super::handlers::{
    get_analyses::{__path_get_analyses, get_analyses},
    process_problem::{__path_process_problem, process_problem},
    resolve_analysis::{__path_resolve_analysis, resolve_analysis},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_analyses, resolve_analysis, process_problem))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/analysis"), get(get_analyses))
        .route(
            &format!("{root_path}/analysis/{{problem_id}}/resolve"),
            post(resolve_analysis),
        )
        .route(
            &format!("{root_path}/analysis/process/{{problem_id}}"),
            post(process_problem),
        )
}
