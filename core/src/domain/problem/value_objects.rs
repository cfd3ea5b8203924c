use uuid::Uuid;

use crate::domain::problem::entities::ProblemStatus;

#[derive(Debug, Clone)]
pub struct CreateProblemInput {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    /// Canonical reporter id, already resolved at the API boundary.
    pub reported_by: Option<Uuid>,
    pub media_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProblemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
    pub status: Option<ProblemStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub status: Option<ProblemStatus>,
    pub category: Option<String>,
    pub reported_by: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
    /// Sort string like `-created_at` or `created_at,category`.
    pub sort: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
