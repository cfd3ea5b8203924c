use crate::domain::{
    analysis::ports::{AnalysisClient, AnalysisRepository},
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    problem::ports::ProblemRepository,
    user::ports::UserRepository,
};

impl<P, A, U, HC, AC> HealthCheckService for Service<P, A, U, HC, AC>
where
    P: ProblemRepository,
    A: AnalysisRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
    AC: AnalysisClient,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
