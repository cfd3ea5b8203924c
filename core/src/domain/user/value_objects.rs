use std::str::FromStr;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// A reporter reference as accepted at the API boundary: either a canonical
/// UUID or a numeric id from the legacy system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterRef {
    Canonical(Uuid),
    Legacy(i32),
}

impl FromStr for ReporterRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(ReporterRef::Canonical(id));
        }
        if let Ok(id) = s.parse::<i32>() {
            return Ok(ReporterRef::Legacy(id));
        }
        Err(CoreError::Validation(format!(
            "reporter reference is neither a UUID nor a legacy id: {s}"
        )))
    }
}
