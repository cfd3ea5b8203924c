use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord,
        ports::{
            AnalysisClient, AnalysisQueryService, AnalysisRepository, EnrichmentService,
            ResolutionService,
        },
        value_objects::{AnalysisRecordWithProblem, EnrichmentOutcome},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    problem::ports::ProblemRepository,
    user::ports::UserRepository,
};

impl<P, A, U, HC, AC> EnrichmentService for Service<P, A, U, HC, AC>
where
    P: ProblemRepository,
    A: AnalysisRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
    AC: AnalysisClient,
{
    async fn enrich_one(&self, problem_id: Uuid) -> Result<AnalysisRecord, CoreError> {
        let problem = self
            .problem_repository
            .get_by_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // A problem without media has nothing to analyze; from the
        // pipeline's point of view there is no enrichable resource here.
        let media_path = problem.media_url.as_deref().ok_or(CoreError::NotFound)?;

        let analysis = self.analysis_client.analyze(media_path).await?;

        let record = AnalysisRecord::from_analysis(
            problem.id,
            problem.latitude,
            problem.longitude,
            analysis,
        );

        let created = self.analysis_repository.create(record).await?;

        tracing::info!(
            problem_id = %problem_id,
            detected_category = created.detected_category.as_deref().unwrap_or("-"),
            "Problem enriched"
        );

        Ok(created)
    }

    async fn enrich_batch(&self, limit: u32) -> Result<Vec<EnrichmentOutcome>, CoreError> {
        let problems = self.problem_repository.find_unanalyzed(limit).await?;

        if problems.is_empty() {
            tracing::debug!("No unanalyzed problems to process");
            return Ok(Vec::new());
        }

        tracing::info!(count = problems.len(), "Processing unanalyzed problems");

        let mut outcomes = Vec::new();
        // Strictly sequential: one in-flight call against the external
        // service and the database at a time.
        for problem in problems {
            match self.enrich_one(problem.id).await {
                Ok(record) => outcomes.push(EnrichmentOutcome {
                    problem_id: problem.id,
                    detected_category: record.detected_category,
                }),
                Err(CoreError::Conflict) => {
                    // Another sweep or the on-create path got there first.
                    tracing::debug!(problem_id = %problem.id, "Already analyzed, skipping");
                }
                Err(e) => {
                    tracing::error!(problem_id = %problem.id, error = %e, "Enrichment failed");
                }
            }
        }

        tracing::info!(processed = outcomes.len(), "Enrichment sweep completed");

        Ok(outcomes)
    }
}

impl<P, A, U, HC, AC> ResolutionService for Service<P, A, U, HC, AC>
where
    P: ProblemRepository,
    A: AnalysisRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
    AC: AnalysisClient,
{
    async fn resolve(&self, problem_id: Uuid) -> Result<(), CoreError> {
        let record = self
            .analysis_repository
            .get_by_problem_id(problem_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.analysis_repository
            .delete_with_problem(record.id, problem_id)
            .await?;

        tracing::info!(problem_id = %problem_id, record_id = %record.id, "Problem resolved");

        Ok(())
    }
}

impl<P, A, U, HC, AC> AnalysisQueryService for Service<P, A, U, HC, AC>
where
    P: ProblemRepository,
    A: AnalysisRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
    AC: AnalysisClient,
{
    async fn list_analyses(&self) -> Result<Vec<AnalysisRecordWithProblem>, CoreError> {
        self.analysis_repository.find_all_with_problems().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ports::{MockAnalysisClient, MockAnalysisRepository};
    use crate::domain::analysis::value_objects::ImageAnalysis;
    use crate::domain::health::ports::MockHealthCheckRepository;
    use crate::domain::problem::entities::Problem;
    use crate::domain::problem::ports::MockProblemRepository;
    use crate::domain::user::ports::MockUserRepository;

    type TestService = Service<
        MockProblemRepository,
        MockAnalysisRepository,
        MockUserRepository,
        MockHealthCheckRepository,
        MockAnalysisClient,
    >;

    fn service(
        problems: MockProblemRepository,
        analyses: MockAnalysisRepository,
        client: MockAnalysisClient,
    ) -> TestService {
        Service::new(
            problems,
            analyses,
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
            client,
        )
    }

    fn problem_with_media(name: &str) -> Problem {
        Problem::new(
            format!("Problem {name}"),
            "description".into(),
            None,
            Some(45.75),
            Some(21.23),
            "road".into(),
            None,
            Some(format!("uploads/problems/{name}.jpg")),
        )
    }

    fn sample_analysis() -> ImageAnalysis {
        ImageAnalysis {
            confidence: 0.9,
            detected_category: Some("pothole,road_damage".into()),
            severity_score: Some(7),
            estimated_fix_time: Some("2 days".into()),
            detected_objects: serde_json::json!({"objects": ["pothole"]}),
        }
    }

    #[tokio::test]
    async fn enrich_one_persists_record_with_problem_geolocation() {
        let problem = problem_with_media("p1");
        let problem_id = problem.id;

        let mut problems = MockProblemRepository::new();
        problems
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(problem)))));

        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .withf(|path| path == "uploads/problems/p1.jpg")
            .return_once(|_| Box::pin(std::future::ready(Ok(sample_analysis()))));

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_create()
            .withf(move |r| {
                r.problem_id == problem_id
                    && r.latitude == Some(45.75)
                    && r.longitude == Some(21.23)
                    && r.confidence == 0.9
            })
            .return_once(|r| Box::pin(std::future::ready(Ok(r))));

        let svc = service(problems, analyses, client);
        let record = svc.enrich_one(problem_id).await.unwrap();
        assert_eq!(record.problem_id, problem_id);
        assert_eq!(record.detected_category.as_deref(), Some("pothole,road_damage"));
    }

    #[tokio::test]
    async fn enrich_one_fails_not_found_for_missing_problem() {
        let mut problems = MockProblemRepository::new();
        problems
            .expect_get_by_id()
            .return_once(|_| Box::pin(std::future::ready(Ok(None))));

        let svc = service(problems, MockAnalysisRepository::new(), MockAnalysisClient::new());
        let err = svc.enrich_one(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn enrich_one_fails_not_found_for_problem_without_media() {
        let mut problem = problem_with_media("p2");
        problem.media_url = None;

        let mut problems = MockProblemRepository::new();
        problems
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(problem)))));

        let svc = service(problems, MockAnalysisRepository::new(), MockAnalysisClient::new());
        let err = svc.enrich_one(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn enrich_one_writes_nothing_when_the_client_fails() {
        let problem = problem_with_media("p3");
        let problem_id = problem.id;

        let mut problems = MockProblemRepository::new();
        problems
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(problem)))));

        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .return_once(|_| Box::pin(std::future::ready(Err(CoreError::Upstream("timeout".into())))));

        // No expectation on create: the mock panics if a record is written.
        let analyses = MockAnalysisRepository::new();

        let svc = service(problems, analyses, client);
        let err = svc.enrich_one(problem_id).await.unwrap_err();
        assert!(matches!(err, CoreError::Upstream(_)));
    }

    #[tokio::test]
    async fn enrich_batch_caps_client_calls_at_limit() {
        let batch: Vec<Problem> = (0..3).map(|i| problem_with_media(&i.to_string())).collect();

        let mut problems = MockProblemRepository::new();
        let returned = batch.clone();
        problems
            .expect_find_unanalyzed()
            .withf(|limit| *limit == 3)
            .return_once(move |_| Box::pin(std::future::ready(Ok(returned))));
        for p in &batch {
            let id = p.id;
            let found = p.clone();
            problems
                .expect_get_by_id()
                .withf(move |pid| *pid == id)
                .return_once(move |_| Box::pin(std::future::ready(Ok(Some(found)))));
        }

        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .times(3)
            .returning(|_| Box::pin(std::future::ready(Ok(sample_analysis()))));

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_create()
            .times(3)
            .returning(|r| Box::pin(std::future::ready(Ok(r))));

        let svc = service(problems, analyses, client);
        let outcomes = svc.enrich_batch(3).await.unwrap();
        assert_eq!(outcomes.len(), 3);
    }

    #[tokio::test]
    async fn enrich_batch_continues_past_individual_failures() {
        let good = problem_with_media("good");
        let bad = problem_with_media("bad");
        let good_id = good.id;

        let bad_id = bad.id;

        let mut problems = MockProblemRepository::new();
        let returned = vec![bad.clone(), good.clone()];
        problems
            .expect_find_unanalyzed()
            .return_once(move |_| Box::pin(std::future::ready(Ok(returned))));
        problems
            .expect_get_by_id()
            .withf(move |id| *id == bad_id)
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(bad)))));
        problems
            .expect_get_by_id()
            .withf(move |id| *id == good_id)
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(good)))));

        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .withf(|path| path.contains("bad"))
            .return_once(|_| Box::pin(std::future::ready(Err(CoreError::Upstream("boom".into())))));
        client
            .expect_analyze()
            .withf(|path| path.contains("good"))
            .return_once(|_| Box::pin(std::future::ready(Ok(sample_analysis()))));

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_create()
            .times(1)
            .returning(|r| Box::pin(std::future::ready(Ok(r))));

        let svc = service(problems, analyses, client);
        let outcomes = svc.enrich_batch(5).await.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].problem_id, good_id);
    }

    #[tokio::test]
    async fn enrich_batch_treats_conflict_as_already_analyzed() {
        let problem = problem_with_media("racer");

        let mut problems = MockProblemRepository::new();
        let returned = vec![problem.clone()];
        problems
            .expect_find_unanalyzed()
            .return_once(move |_| Box::pin(std::future::ready(Ok(returned))));
        problems
            .expect_get_by_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(problem)))));

        let mut client = MockAnalysisClient::new();
        client
            .expect_analyze()
            .return_once(|_| Box::pin(std::future::ready(Ok(sample_analysis()))));

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_create()
            .return_once(|_| Box::pin(std::future::ready(Err(CoreError::Conflict))));

        let svc = service(problems, analyses, client);
        let outcomes = svc.enrich_batch(1).await.unwrap();
        // The loser of the race reports no outcome but does not fail the
        // sweep.
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn resolve_fails_not_found_without_a_record() {
        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_get_by_problem_id()
            .return_once(|_| Box::pin(std::future::ready(Ok(None))));
        // No delete expectation: nothing may be touched.

        let svc = service(MockProblemRepository::new(), analyses, MockAnalysisClient::new());
        let err = svc.resolve(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn resolve_deletes_record_and_problem_together() {
        let problem = problem_with_media("done");
        let problem_id = problem.id;
        let record = AnalysisRecord::from_analysis(
            problem_id,
            problem.latitude,
            problem.longitude,
            sample_analysis(),
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

        let svc = service(MockProblemRepository::new(), analyses, MockAnalysisClient::new());
        svc.resolve(problem_id).await.unwrap();
    }

    #[tokio::test]
    async fn resolve_propagates_a_rolled_back_transaction() {
        let problem_id = Uuid::new_v4();
        let record =
            AnalysisRecord::from_analysis(problem_id, None, None, sample_analysis());

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_get_by_problem_id()
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(record)))));
        analyses.expect_delete_with_problem().return_once(|_, _| {
            Box::pin(std::future::ready(Err(CoreError::TransactionFailed(
                "forced".into(),
            ))))
        });

        let svc = service(MockProblemRepository::new(), analyses, MockAnalysisClient::new());
        let err = svc.resolve(problem_id).await.unwrap_err();
        assert!(matches!(err, CoreError::TransactionFailed(_)));
    }

    #[tokio::test]
    async fn resolve_is_not_idempotent() {
        let problem_id = Uuid::new_v4();
        let record =
            AnalysisRecord::from_analysis(problem_id, None, None, sample_analysis());

        let mut analyses = MockAnalysisRepository::new();
        let mut first = Some(record);
        analyses
            .expect_get_by_problem_id()
            .times(2)
            .returning(move |_| Box::pin(std::future::ready(Ok(first.take()))));
        analyses
            .expect_delete_with_problem()
            .times(1)
            .returning(|_, _| Box::pin(std::future::ready(Ok(()))));

        let svc = service(MockProblemRepository::new(), analyses, MockAnalysisClient::new());
        svc.resolve(problem_id).await.unwrap();
        let err = svc.resolve(problem_id).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
