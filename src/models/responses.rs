//! Response DTOs for the sum service API
//!
//! Defines the JSON bodies returned outside the HTML pages.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Table the service memoizes into
    pub table: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(table: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            table: table.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
