use crate::{
    domain::problem::entities::{Problem, ProblemStatus},
    entity::problems,
};

impl From<&problems::Model> for Problem {
    fn from(model: &problems::Model) -> Self {
        Self {
            id: model.id,
            title: model.title.clone(),
            description: model.description.clone(),
            location: model.location.clone(),
            latitude: model.latitude,
            longitude: model.longitude,
            category: model.category.clone(),
            // Rows written before the vocabulary was fixed may carry legacy
            // values; anything unparseable degrades to the initial status.
            status: model
                .status
                .parse()
                .unwrap_or(ProblemStatus::Reported),
            reported_by: model.reported_by,
            assigned_to: model.assigned_to,
            media_url: model.media_url.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<problems::Model> for Problem {
    fn from(model: problems::Model) -> Self {
        Self::from(&model)
    }
}
