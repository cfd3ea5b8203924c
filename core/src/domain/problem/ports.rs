use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    problem::{
        entities::{Problem, ProblemStatus},
        value_objects::{CreateProblemInput, ProblemFilter, UpdateProblemInput},
    },
};

/// Repository trait for problem records.
#[cfg_attr(test, mockall::automock)]
pub trait ProblemRepository: Send + Sync {
    fn create(&self, problem: Problem) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn get_by_id(
        &self,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<Option<Problem>, CoreError>> + Send;

    fn find_all(
        &self,
        filter: ProblemFilter,
    ) -> impl Future<Output = Result<Vec<Problem>, CoreError>> + Send;

    fn update(
        &self,
        problem_id: Uuid,
        input: UpdateProblemInput,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn update_status(
        &self,
        problem_id: Uuid,
        status: ProblemStatus,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn assign(
        &self,
        problem_id: Uuid,
        assignee_id: Uuid,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn delete(&self, problem_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Problems that carry media but have no analysis record yet, oldest
    /// first, capped at `limit`.
    fn find_unanalyzed(
        &self,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Problem>, CoreError>> + Send;
}

/// Service trait for problem lifecycle operations.
#[cfg_attr(test, mockall::automock)]
pub trait ProblemService: Send + Sync {
    fn create_problem(
        &self,
        input: CreateProblemInput,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn get_problem(
        &self,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn list_problems(
        &self,
        filter: ProblemFilter,
    ) -> impl Future<Output = Result<Vec<Problem>, CoreError>> + Send;

    fn update_problem(
        &self,
        problem_id: Uuid,
        input: UpdateProblemInput,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn update_problem_status(
        &self,
        problem_id: Uuid,
        status: ProblemStatus,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn assign_problem(
        &self,
        problem_id: Uuid,
        assignee_id: Uuid,
    ) -> impl Future<Output = Result<Problem, CoreError>> + Send;

    fn delete_problem(
        &self,
        problem_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
