use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::User};

/// Repository trait for user lookups. Problems only ever read users; account
/// management is an external collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_legacy_id(
        &self,
        legacy_id: i32,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
