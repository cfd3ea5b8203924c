/// Aggregate service: one value generic over every port, on which the
/// domain service traits are implemented. Handlers and the scheduler hold a
/// clone of the fully-wired instance.
#[derive(Debug, Clone)]
pub struct Service<P, A, U, HC, AC> {
    pub problem_repository: P,
    pub analysis_repository: A,
    pub user_repository: U,
    pub health_check_repository: HC,
    pub analysis_client: AC,
}

impl<P, A, U, HC, AC> Service<P, A, U, HC, AC> {
    pub fn new(
        problem_repository: P,
        analysis_repository: A,
        user_repository: U,
        health_check_repository: HC,
        analysis_client: AC,
    ) -> Self {
        Self {
            problem_repository,
            analysis_repository,
            user_repository,
            health_check_repository,
            analysis_client,
        }
    }
}
