use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::HealthApiDoc, problem::router::ProblemApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Civitas API"
    ),
    nest(
        (path = "/problems", api = ProblemApiDoc),
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
