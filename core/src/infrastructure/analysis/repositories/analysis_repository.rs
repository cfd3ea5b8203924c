use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr, TransactionTrait,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        analysis::{
            entities::AnalysisRecord, ports::AnalysisRepository,
            value_objects::AnalysisRecordWithProblem,
        },
        common::entities::app_errors::CoreError,
        problem::entities::Problem,
    },
    entity::{
        analysis_records::{ActiveModel, Column, Entity},
        problems,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresAnalysisRepository {
    pub db: DatabaseConnection,
}

impl PostgresAnalysisRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AnalysisRepository for PostgresAnalysisRepository {
    async fn create(&self, record: AnalysisRecord) -> Result<AnalysisRecord, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(record.id),
            problem_id: Set(record.problem_id),
            latitude: Set(record.latitude),
            longitude: Set(record.longitude),
            confidence: Set(record.confidence),
            detected_category: Set(record.detected_category),
            severity_score: Set(record.severity_score),
            estimated_fix_time: Set(record.estimated_fix_time),
            detected_objects: Set(record.detected_objects),
            processed_at: Set(record.processed_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(AnalysisRecord::from)
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Conflict,
            _ => {
                error!("Failed to create analysis record: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(created)
    }

    async fn get_by_problem_id(
        &self,
        problem_id: Uuid,
    ) -> Result<Option<AnalysisRecord>, CoreError> {
        let record = Entity::find()
            .filter(Column::ProblemId.eq(problem_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get analysis record: {}", e);
                CoreError::InternalServerError
            })?
            .map(AnalysisRecord::from);

        Ok(record)
    }

    async fn find_all_with_problems(&self) -> Result<Vec<AnalysisRecordWithProblem>, CoreError> {
        let rows = Entity::find()
            .find_also_related(problems::Entity)
            .order_by_desc(Column::ProcessedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch analysis records: {}", e);
                CoreError::InternalServerError
            })?;

        let records = rows
            .into_iter()
            .map(|(record, problem)| AnalysisRecordWithProblem {
                record: AnalysisRecord::from(record),
                problem: problem.map(Problem::from),
            })
            .collect();

        Ok(records)
    }

    async fn delete_with_problem(&self, record_id: Uuid, problem_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::TransactionFailed(e.to_string())
        })?;

        let record_result = Entity::delete_by_id(record_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete analysis record: {}", e);
                CoreError::TransactionFailed(e.to_string())
            })?;

        if record_result.rows_affected == 0 {
            // Dropping the transaction rolls it back.
            return Err(CoreError::NotFound);
        }

        let problem_result = problems::Entity::delete_by_id(problem_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete problem: {}", e);
                CoreError::TransactionFailed(e.to_string())
            })?;

        if problem_result.rows_affected == 0 {
            // The record pointed at a problem that is already gone; removing
            // the orphaned record alone is still the right outcome.
            warn!(problem_id = %problem_id, "Resolved analysis record had no problem row");
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit resolve transaction: {}", e);
            CoreError::TransactionFailed(e.to_string())
        })?;

        Ok(())
    }
}
