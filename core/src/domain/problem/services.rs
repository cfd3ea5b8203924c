use uuid::Uuid;

use crate::domain::{
    analysis::ports::{AnalysisClient, AnalysisRepository},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    problem::{
        entities::{Problem, ProblemStatus},
        ports::{ProblemRepository, ProblemService},
        value_objects::{CreateProblemInput, ProblemFilter, UpdateProblemInput},
    },
    user::ports::UserRepository,
};

impl<P, A, U, HC, AC> ProblemService for Service<P, A, U, HC, AC>
where
    P: ProblemRepository,
    A: AnalysisRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
    AC: AnalysisClient,
{
    async fn create_problem(&self, input: CreateProblemInput) -> Result<Problem, CoreError> {
        if input.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if input.description.trim().is_empty() {
            return Err(CoreError::Validation("description must not be empty".into()));
        }

        let problem = Problem::new(
            input.title,
            input.description,
            input.location,
            input.latitude,
            input.longitude,
            input.category.unwrap_or_else(|| "general".to_string()),
            input.reported_by,
            input.media_url,
        );

        let created = self.problem_repository.create(problem).await?;

        tracing::info!(
            problem_id = %created.id,
            category = %created.category,
            has_media = created.has_media(),
            "Problem reported"
        );

        Ok(created)
    }

    async fn get_problem(&self, problem_id: Uuid) -> Result<Problem, CoreError> {
        self.problem_repository
            .get_by_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_problems(&self, filter: ProblemFilter) -> Result<Vec<Problem>, CoreError> {
        self.problem_repository.find_all(filter).await
    }

    async fn update_problem(
        &self,
        problem_id: Uuid,
        input: UpdateProblemInput,
    ) -> Result<Problem, CoreError> {
        // Existence check first so callers get NotFound, not a bare update
        // miss.
        self.problem_repository
            .get_by_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.problem_repository.update(problem_id, input).await
    }

    async fn update_problem_status(
        &self,
        problem_id: Uuid,
        status: ProblemStatus,
    ) -> Result<Problem, CoreError> {
        self.problem_repository
            .get_by_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let updated = self.problem_repository.update_status(problem_id, status).await?;

        tracing::info!(problem_id = %problem_id, status = %status, "Problem status updated");

        Ok(updated)
    }

    async fn assign_problem(
        &self,
        problem_id: Uuid,
        assignee_id: Uuid,
    ) -> Result<Problem, CoreError> {
        self.problem_repository
            .get_by_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let assignee = self
            .user_repository
            .get_by_id(assignee_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if !assignee.is_employee() || !assignee.active {
            return Err(CoreError::Validation(
                "assignee must be an active employee".into(),
            ));
        }

        let assigned = self.problem_repository.assign(problem_id, assignee_id).await?;

        tracing::info!(
            problem_id = %problem_id,
            assignee_id = %assignee_id,
            "Problem assigned"
        );

        Ok(assigned)
    }

    async fn delete_problem(&self, problem_id: Uuid) -> Result<(), CoreError> {
        // An analyzed problem still owns its record; the FK on
        // analysis_records.problem_id rejects a bare problem delete, so both
        // rows go through the same transaction resolve uses.
        match self
            .analysis_repository
            .get_by_problem_id(problem_id)
            .await?
        {
            Some(record) => {
                self.analysis_repository
                    .delete_with_problem(record.id, problem_id)
                    .await
            }
            None => self.problem_repository.delete(problem_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::AnalysisRecord;
    use crate::domain::analysis::ports::{MockAnalysisClient, MockAnalysisRepository};
    use crate::domain::analysis::value_objects::ImageAnalysis;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::domain::problem::ports::MockProblemRepository;
    use crate::domain::user::entities::{User, UserType};
    use crate::domain::user::ports::MockUserRepository;
    use chrono::Utc;

    type TestService = Service<
        MockProblemRepository,
        MockAnalysisRepository,
        MockUserRepository,
        MockHealthCheckRepository,
        MockAnalysisClient,
    >;

    fn service(problems: MockProblemRepository, users: MockUserRepository) -> TestService {
        service_with_analyses(problems, MockAnalysisRepository::new(), users)
    }

    fn service_with_analyses(
        problems: MockProblemRepository,
        analyses: MockAnalysisRepository,
        users: MockUserRepository,
    ) -> TestService {
        Service::new(
            problems,
            analyses,
            users,
            MockHealthCheckRepository::new(),
            MockAnalysisClient::new(),
        )
    }

    fn sample_problem() -> Problem {
        Problem::new(
            "Pothole on Main St".into(),
            "Deep pothole near the crosswalk".into(),
            None,
            Some(45.75),
            Some(21.23),
            "road".into(),
            None,
            Some("uploads/problems/pothole.jpg".into()),
        )
    }

    fn citizen(user_type: UserType, active: bool) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ion".into(),
            last_name: "Ionescu".into(),
            email: "ion@example.com".into(),
            user_type,
            department: None,
            active,
            legacy_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_title() {
        let svc = service(MockProblemRepository::new(), MockUserRepository::new());

        let err = svc
            .create_problem(CreateProblemInput {
                title: "  ".into(),
                description: "something".into(),
                location: None,
                latitude: None,
                longitude: None,
                category: None,
                reported_by: None,
                media_url: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn create_defaults_category_to_general() {
        let mut problems = MockProblemRepository::new();
        problems
            .expect_create()
            .withf(|p| p.category == "general" && p.status == ProblemStatus::Reported)
            .return_once(|p| Box::pin(std::future::ready(Ok(p))));

        let svc = service(problems, MockUserRepository::new());

        let created = svc
            .create_problem(CreateProblemInput {
                title: "Graffiti".into(),
                description: "On the school wall".into(),
                location: None,
                latitude: None,
                longitude: None,
                category: None,
                reported_by: None,
                media_url: None,
            })
            .await
            .unwrap();

        assert_eq!(created.category, "general");
    }

    #[tokio::test]
    async fn assign_rejects_inactive_or_plain_users() {
        let problem = sample_problem();
        let problem_id = problem.id;

        for user in [citizen(UserType::User, true), citizen(UserType::Employee, false)] {
            let mut problems = MockProblemRepository::new();
            let p = problem.clone();
            problems
                .expect_get_by_id()
                .return_once(move |_| Box::pin(std::future::ready(Ok(Some(p)))));

            let mut users = MockUserRepository::new();
            users
                .expect_get_by_id()
                .return_once(move |_| Box::pin(std::future::ready(Ok(Some(user)))));

            let svc = service(problems, users);
            let err = svc
                .assign_problem(problem_id, Uuid::new_v4())
                .await
                .unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn assign_sets_assignee_on_the_problem() {
        let problem = sample_problem();
        let problem_id = problem.id;
        let employee = citizen(UserType::Employee, true);
        let employee_id = employee.id;

        let mut problems = MockProblemRepository::new();
        let p = problem.clone();
        problems
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(p)))));
        problems
            .expect_assign()
            .withf(move |pid, aid| *pid == problem_id && *aid == employee_id)
            .return_once(move |_, aid| {
                let mut p = problem;
                p.assigned_to = Some(aid);
                Box::pin(std::future::ready(Ok(p)))
            });

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(employee)))));

        let svc = service(problems, users);
        let assigned = svc.assign_problem(problem_id, employee_id).await.unwrap();
        assert_eq!(assigned.assigned_to, Some(employee_id));
    }

    #[tokio::test]
    async fn delete_takes_the_analysis_record_with_an_analyzed_problem() {
        let problem = sample_problem();
        let problem_id = problem.id;
        let record = AnalysisRecord::from_analysis(
            problem_id,
            problem.latitude,
            problem.longitude,
            ImageAnalysis {
                confidence: 0.9,
                detected_category: Some("pothole".into()),
                severity_score: Some(5),
                estimated_fix_time: None,
                detected_objects: serde_json::json!({}),
            },
        );
        let record_id = record.id;

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_get_by_problem_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(record)))));
        analyses
            .expect_delete_with_problem()
            .withf(move |rid, pid| *rid == record_id && *pid == problem_id)
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));

        // No delete expectation on the problem repository: the bare delete
        // would trip the FK, so it must not be attempted.
        let problems = MockProblemRepository::new();

        let svc = service_with_analyses(problems, analyses, MockUserRepository::new());
        svc.delete_problem(problem_id).await.unwrap();
    }

    #[tokio::test]
    async fn delete_of_an_unanalyzed_problem_touches_only_the_problem() {
        let problem_id = Uuid::new_v4();

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_get_by_problem_id()
            .return_once(|_| Box::pin(std::future::ready(Ok(None))));

        let mut problems = MockProblemRepository::new();
        problems
            .expect_delete()
            .withf(move |pid| *pid == problem_id)
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));

        let svc = service_with_analyses(problems, analyses, MockUserRepository::new());
        svc.delete_problem(problem_id).await.unwrap();
    }
}
