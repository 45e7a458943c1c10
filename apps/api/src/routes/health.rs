use axum::Json;
use serde::{Deserialize, Serialize};

use crate::llm_client::MODEL;

/// Body of `GET /health`. Also decoded by the `ask` client's `--check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
}

/// GET /health
/// Liveness plus the build version and the completion model in use.
/// Never reports whether the provider credential is set.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: "interview-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: MODEL.to_string(),
    })
}
