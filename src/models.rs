//! Response bodies for the demo API.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
