use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::value_objects::ImageAnalysis;
use crate::domain::common::generate_timestamp;

/// AI-derived enrichment attached one-to-one to a problem. Created once by
/// the enrichment pipeline, never updated, deleted together with its problem
/// on resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub confidence: f64,
    pub detected_category: Option<String>,
    pub severity_score: Option<i32>,
    pub estimated_fix_time: Option<String>,
    pub detected_objects: serde_json::Value,
    pub processed_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Build a record from a problem's identity/geolocation and the
    /// normalized output of the analysis client.
    pub fn from_analysis(
        problem_id: Uuid,
        latitude: Option<f64>,
        longitude: Option<f64>,
        analysis: ImageAnalysis,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            problem_id,
            latitude,
            longitude,
            confidence: analysis.confidence,
            detected_category: analysis.detected_category,
            severity_score: analysis.severity_score,
            estimated_fix_time: analysis.estimated_fix_time,
            detected_objects: analysis.detected_objects,
            processed_at: now,
        }
    }
}
