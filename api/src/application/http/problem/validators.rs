use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Fields of the multipart create-problem request, collected before
/// validation.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProblemValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub category: Option<String>,

    /// Reporter reference: canonical UUID or legacy numeric id.
    #[serde(default)]
    pub reported_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProblemValidator {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProblemStatusValidator {
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignProblemValidator {
    pub user_id: uuid::Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_description() {
        let validator = CreateProblemValidator {
            title: String::new(),
            description: "street light out".into(),
            ..Default::default()
        };
        assert!(validator.validate().is_err());

        let validator = CreateProblemValidator {
            title: "Broken street light".into(),
            description: "street light out".into(),
            ..Default::default()
        };
        assert!(validator.validate().is_ok());
    }

    #[test]
    fn create_rejects_out_of_range_coordinates() {
        let validator = CreateProblemValidator {
            title: "t".into(),
            description: "d".into(),
            latitude: Some(95.0),
            ..Default::default()
        };
        assert!(validator.validate().is_err());
    }
}
