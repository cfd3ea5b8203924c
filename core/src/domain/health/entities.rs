use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub reachable: bool,
    /// Round-trip latency of the probe query, in milliseconds.
    pub latency_ms: u64,
}
