use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::AnalysisRecord,
        value_objects::{AnalysisRecordWithProblem, EnrichmentOutcome, ImageAnalysis},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for analysis records.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRepository: Send + Sync {
    /// Insert a new record. A unique violation on `problem_id` maps to
    /// `CoreError::Conflict`.
    fn create(
        &self,
        record: AnalysisRecord,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    fn get_by_problem_id(
        &self,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<Option<AnalysisRecord>, CoreError>> + Send;

    fn find_all_with_problems(
        &self,
    ) -> impl Future<Output = Result<Vec<AnalysisRecordWithProblem>, CoreError>> + Send;

    /// Delete the record and its problem in one transaction. The problem
    /// being already gone is tolerated; any other failure rolls back both
    /// deletes.
    fn delete_with_problem(
        &self,
        record_id: Uuid,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Client for the external image-analysis endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisClient: Send + Sync {
    /// Analyze the media stored at `media_path` (relative to the uploads
    /// root). Fails with `NotFound` when the file is missing, `Upstream` on
    /// any transport or non-success response.
    fn analyze(
        &self,
        media_path: &str,
    ) -> impl Future<Output = Result<ImageAnalysis, CoreError>> + Send;
}

/// Service trait for the enrichment pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait EnrichmentService: Send + Sync {
    /// Enrich a single problem: exactly one analysis record is written on
    /// success, none on failure.
    fn enrich_one(
        &self,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    /// Sweep up to `limit` unanalyzed problems sequentially. Individual
    /// failures are logged and skipped; only successes are returned.
    fn enrich_batch(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<EnrichmentOutcome>, CoreError>> + Send;
}

/// Service trait for the resolve action.
#[cfg_attr(test, mockall::automock)]
pub trait ResolutionService: Send + Sync {
    /// Atomically remove a problem and its analysis record.
    ///
    /// Not idempotent: once resolved, a second call fails with `NotFound`
    /// because the analysis record is gone.
    fn resolve(&self, problem_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for reading analysis records.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisQueryService: Send + Sync {
    fn list_analyses(
        &self,
    ) -> impl Future<Output = Result<Vec<AnalysisRecordWithProblem>, CoreError>> + Send;
}
