use crate::{domain::analysis::entities::AnalysisRecord, entity::analysis_records};

impl From<&analysis_records::Model> for AnalysisRecord {
    fn from(model: &analysis_records::Model) -> Self {
        Self {
            id: model.id,
            problem_id: model.problem_id,
            latitude: model.latitude,
            longitude: model.longitude,
            confidence: model.confidence,
            detected_category: model.detected_category.clone(),
            severity_score: model.severity_score,
            estimated_fix_time: model.estimated_fix_time.clone(),
            detected_objects: model.detected_objects.clone(),
            processed_at: model.processed_at.to_utc(),
        }
    }
}

impl From<analysis_records::Model> for AnalysisRecord {
    fn from(model: analysis_records::Model) -> Self {
        Self::from(&model)
    }
}
