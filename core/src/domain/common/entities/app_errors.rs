use thiserror::Error;

/// Error taxonomy shared by every domain service.
///
/// Store-layer failures are logged where they happen and folded into
/// `InternalServerError`, with two exceptions: unique-constraint violations
/// surface as `Conflict`, and the atomic resolve reports `TransactionFailed`
/// so callers can tell a rolled-back resolve from a generic server error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("an analysis record already exists for this problem")]
    Conflict,

    #[error("upstream AI service error: {0}")]
    Upstream(String),

    #[error("resolve transaction failed: {0}")]
    TransactionFailed(String),

    #[error("internal server error")]
    InternalServerError,
}
