use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, sea_query::Query,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        problem::{
            entities::{Problem, ProblemStatus},
            ports::ProblemRepository,
            value_objects::{ProblemFilter, UpdateProblemInput},
        },
    },
    entity::{
        analysis_records,
        problems::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProblemRepository {
    pub db: DatabaseConnection,
}

impl PostgresProblemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProblemRepository for PostgresProblemRepository {
    async fn create(&self, problem: Problem) -> Result<Problem, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(problem.id),
            title: Set(problem.title),
            description: Set(problem.description),
            location: Set(problem.location),
            latitude: Set(problem.latitude),
            longitude: Set(problem.longitude),
            category: Set(problem.category),
            status: Set(problem.status.as_str().to_string()),
            reported_by: Set(problem.reported_by),
            assigned_to: Set(problem.assigned_to),
            media_url: Set(problem.media_url),
            created_at: Set(problem.created_at.fixed_offset()),
            updated_at: Set(problem.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Problem::from)
        .map_err(|e| {
            error!("Failed to create problem: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, problem_id: Uuid) -> Result<Option<Problem>, CoreError> {
        let problem = Entity::find_by_id(problem_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get problem: {}", e);
                CoreError::InternalServerError
            })?
            .map(Problem::from);

        Ok(problem)
    }

    async fn find_all(&self, filter: ProblemFilter) -> Result<Vec<Problem>, CoreError> {
        let mut query = Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(ref category) = filter.category {
            query = query.filter(Column::Category.eq(category.clone()));
        }

        if let Some(reported_by) = filter.reported_by {
            query = query.filter(Column::ReportedBy.eq(reported_by));
        }

        if let Some(assigned_to) = filter.assigned_to {
            query = query.filter(Column::AssignedTo.eq(assigned_to));
        }

        if let Some(ref sort_str) = filter.sort {
            for sort_part in sort_str.split(',') {
                let sort_part = sort_part.trim();
                let (field, order) = match sort_part.strip_prefix('-') {
                    Some(field) => (field, Order::Desc),
                    None => (sort_part, Order::Asc),
                };
                match field {
                    "created_at" => query = query.order_by(Column::CreatedAt, order),
                    "updated_at" => query = query.order_by(Column::UpdatedAt, order),
                    "category" => query = query.order_by(Column::Category, order),
                    "status" => query = query.order_by(Column::Status, order),
                    _ => {
                        // Unknown field, ignore
                    }
                }
            }
        } else {
            query = query.order_by_desc(Column::CreatedAt);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let problems = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch problems: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Problem::from)
            .collect();

        Ok(problems)
    }

    async fn update(
        &self,
        problem_id: Uuid,
        input: UpdateProblemInput,
    ) -> Result<Problem, CoreError> {
        let (now, _) = generate_timestamp();

        let mut active = ActiveModel {
            id: Set(problem_id),
            updated_at: Set(now.fixed_offset()),
            ..Default::default()
        };

        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(location) = input.location {
            active.location = Set(Some(location));
        }
        if let Some(latitude) = input.latitude {
            active.latitude = Set(Some(latitude));
        }
        if let Some(longitude) = input.longitude {
            active.longitude = Set(Some(longitude));
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(status) = input.status {
            active.status = Set(status.as_str().to_string());
        }

        let updated = Entity::update(active)
            .exec(&self.db)
            .await
            .map(Problem::from)
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update problem: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated)
    }

    async fn update_status(
        &self,
        problem_id: Uuid,
        status: ProblemStatus,
    ) -> Result<Problem, CoreError> {
        self.update(
            problem_id,
            UpdateProblemInput {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    async fn assign(&self, problem_id: Uuid, assignee_id: Uuid) -> Result<Problem, CoreError> {
        let (now, _) = generate_timestamp();

        let active = ActiveModel {
            id: Set(problem_id),
            assigned_to: Set(Some(assignee_id)),
            updated_at: Set(now.fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update(active)
            .exec(&self.db)
            .await
            .map(Problem::from)
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to assign problem: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated)
    }

    async fn delete(&self, problem_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(problem_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete problem: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn find_unanalyzed(&self, limit: u32) -> Result<Vec<Problem>, CoreError> {
        let problems = Entity::find()
            .filter(Column::MediaUrl.is_not_null())
            .filter(
                Column::Id.not_in_subquery(
                    Query::select()
                        .column(analysis_records::Column::ProblemId)
                        .from(analysis_records::Entity)
                        .to_owned(),
                ),
            )
            .order_by_asc(Column::CreatedAt)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch unanalyzed problems: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Problem::from)
            .collect();

        Ok(problems)
    }
}
