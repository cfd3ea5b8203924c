use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::common::entities::app_errors::CoreError;

/// A citizen-reported municipal issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: String,
    pub status: ProblemStatus,
    pub reported_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical status vocabulary. The legacy `"nou"` value still parses (as
/// `Reported`) but is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Reported,
    InProgress,
    Completed,
    Cancelled,
}

impl ProblemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemStatus::Reported => "reported",
            ProblemStatus::InProgress => "in_progress",
            ProblemStatus::Completed => "completed",
            ProblemStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reported" | "nou" => Ok(ProblemStatus::Reported),
            "in_progress" => Ok(ProblemStatus::InProgress),
            "completed" => Ok(ProblemStatus::Completed),
            "cancelled" => Ok(ProblemStatus::Cancelled),
            other => Err(CoreError::Validation(format!(
                "unknown problem status: {other}"
            ))),
        }
    }
}

impl Problem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        category: String,
        reported_by: Option<Uuid>,
        media_url: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title,
            description,
            location,
            latitude,
            longitude,
            category,
            status: ProblemStatus::Reported,
            reported_by,
            assigned_to: None,
            media_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_media(&self) -> bool {
        self.media_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_canonical_values() {
        assert_eq!("reported".parse::<ProblemStatus>().unwrap(), ProblemStatus::Reported);
        assert_eq!("in_progress".parse::<ProblemStatus>().unwrap(), ProblemStatus::InProgress);
        assert_eq!("completed".parse::<ProblemStatus>().unwrap(), ProblemStatus::Completed);
        assert_eq!("cancelled".parse::<ProblemStatus>().unwrap(), ProblemStatus::Cancelled);
    }

    #[test]
    fn status_aliases_legacy_nou_to_reported() {
        assert_eq!("nou".parse::<ProblemStatus>().unwrap(), ProblemStatus::Reported);
        // The alias never round-trips back out.
        assert_eq!(ProblemStatus::Reported.as_str(), "reported");
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(matches!(
            "pending".parse::<ProblemStatus>(),
            Err(CoreError::Validation(_))
        ));
    }
}
