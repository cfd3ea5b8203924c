use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::problem::entities::Problem;

/// Normalized output of one external analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    pub confidence: f64,
    /// Multi-valued categories are flattened into one comma-joined string.
    pub detected_category: Option<String>,
    pub severity_score: Option<i32>,
    pub estimated_fix_time: Option<String>,
    pub detected_objects: serde_json::Value,
}

/// Per-problem result of a successful batch enrichment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichmentOutcome {
    pub problem_id: Uuid,
    pub detected_category: Option<String>,
}

/// An analysis record joined with the problem it belongs to, as served to
/// the triage dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecordWithProblem {
    #[serde(flatten)]
    pub record: super::entities::AnalysisRecord,
    pub problem: Option<Problem>,
}
