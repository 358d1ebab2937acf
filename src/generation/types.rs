//! Wire shapes of the generation backend.

use serde::{Deserialize, Serialize};

/// Successful generation response. Both payloads are opaque encoded-image
/// strings rendered directly by the host; the client never re-validates them
/// pixel-wise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The composite portrait.
    #[serde(rename = "image")]
    pub composite_image: String,
    /// Scannable retrieval code, when the backend produced one.
    #[serde(rename = "qrCode")]
    pub scan_code: Option<String>,
}

/// Error body of a non-2xx generation response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(rename = "hasApiKey")]
    pub has_api_key: bool,
}
