use crate::domain::common::{CivitasConfig, services::Service};
use crate::infrastructure::{
    ai::http_client::HttpAnalysisClient, analysis::repositories::analysis_repository::PostgresAnalysisRepository,
    db::postgres::Postgres, health::repository::PostgresHealthCheckRepository,
    problem::repositories::problem_repository::PostgresProblemRepository,
    user::repositories::user_repository::PostgresUserRepository,
};

pub mod scheduler;

/// The fully-wired service all entry points share.
pub type CivitasService = Service<
    PostgresProblemRepository,
    PostgresAnalysisRepository,
    PostgresUserRepository,
    PostgresHealthCheckRepository,
    HttpAnalysisClient,
>;

/// Connect to Postgres, run migrations and wire every port to its concrete
/// adapter.
pub async fn create_service(config: CivitasConfig) -> Result<CivitasService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresProblemRepository::new(db.clone()),
        PostgresAnalysisRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        HttpAnalysisClient::new(&config.ai_service, &config.uploads),
    ))
}
