use super::handlers::{
    assign_problem::{__path_assign_problem, assign_problem},
    create_problem::{__path_create_problem, create_problem},
    delete_problem::{__path_delete_problem, delete_problem},
    get_assigned_problems::{__path_get_assigned_problems, get_assigned_problems},
    get_problem::{__path_get_problem, get_problem},
    get_problems::{__path_get_problems, get_problems},
    get_problems_by_status::{__path_get_problems_by_status, get_problems_by_status},
    get_problems_by_user::{__path_get_problems_by_user, get_problems_by_user},
    update_problem::{__path_update_problem, update_problem},
    update_problem_status::{__path_update_problem_status, update_problem_status},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_problems,
    get_problem,
    create_problem,
    update_problem,
    update_problem_status,
    delete_problem,
    assign_problem,
    get_problems_by_status,
    get_problems_by_user,
    get_assigned_problems
))]
pub struct ProblemApiDoc;

pub fn problem_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/problems"), get(get_problems))
        .route(&format!("{root_path}/problems"), post(create_problem))
        .route(
            &format!("{root_path}/problems/status/{{status}}"),
            get(get_problems_by_status),
        )
        .route(
            &format!("{root_path}/problems/user/{{user_ref}}"),
            get(get_problems_by_user),
        )
        .route(
            &format!("{root_path}/problems/assigned/{{user_id}}"),
            get(get_assigned_problems),
        )
        .route(
            &format!("{root_path}/problems/{{problem_id}}"),
            get(get_problem),
        )
        .route(
            &format!("{root_path}/problems/{{problem_id}}"),
            put(update_problem),
        )
        .route(
            &format!("{root_path}/problems/{{problem_id}}"),
            delete(delete_problem),
        )
        .route(
            &format!("{root_path}/problems/{{problem_id}}/status"),
            put(update_problem_status),
        )
        .route(
            &format!("{root_path}/problems/{{problem_id}}/assign"),
            post(assign_problem),
        )
}
