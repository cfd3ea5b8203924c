use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// Account referenced by problems as reporter or assignee. Account
/// management itself (registration, auth) lives outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
    pub department: Option<String>,
    pub active: bool,
    /// Numeric id carried over from the legacy system; still accepted in
    /// reporter references.
    pub legacy_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    User,
    Employee,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Employee => "employee",
            UserType::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserType::User),
            "employee" => Ok(UserType::Employee),
            "admin" => Ok(UserType::Admin),
            other => Err(CoreError::Validation(format!("unknown user type: {other}"))),
        }
    }
}

impl User {
    pub fn is_employee(&self) -> bool {
        matches!(self.user_type, UserType::Employee | UserType::Admin)
    }
}
