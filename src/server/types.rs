//! JSON-serializable types for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Query parameters for the feed endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedParams {
    #[serde(rename = "databaseId")]
    pub database_id: Option<String>,
}

/// Error body returned on every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
