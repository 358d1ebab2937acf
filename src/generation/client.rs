//! HTTP client for the generation backend.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{info, warn};
use url::Url;

use super::types::{ErrorBody, GenerationOutcome, HealthReport};
use crate::capture::CapturedImage;
use crate::error::GenerationError;

/// Shown when the server rejects a request without a parseable message.
pub const GENERIC_REJECTION: &str = "The generation service could not process the request.";

/// The generation backend as the controller sees it. Implemented by
/// [`GenerationClient`]; test suites substitute recording stubs.
#[allow(async_fn_in_trait)]
pub trait Generate {
    /// Submit one image+prompt pair. A single attempt per invocation, no
    /// automatic retry.
    async fn generate(
        &self,
        image: &CapturedImage,
        prompt: &str,
    ) -> Result<GenerationOutcome, GenerationError>;

    /// Probe backend configuration.
    async fn check_health(&self) -> Result<HealthReport, GenerationError>;
}

/// reqwest-backed client for the booth's generation endpoints.
pub struct GenerationClient {
    client: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    /// Build a client against `base_url` with a bounded request timeout.
    ///
    /// A hung transport surfaces as [`GenerationError::Network`] once the
    /// timeout elapses instead of leaving the booth waiting forever.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        Url::parse(base_url).map_err(|e| format!("Invalid backend URL '{}': {}", base_url, e))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest client");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Generate for GenerationClient {
    async fn generate(
        &self,
        image: &CapturedImage,
        prompt: &str,
    ) -> Result<GenerationOutcome, GenerationError> {
        info!(
            "Submitting generation request: {}x{} image, {} char prompt",
            image.width,
            image.height,
            prompt.len()
        );

        let part = Part::bytes(image.png.clone())
            .file_name("captured.png")
            .mime_str("image/png")
            .expect("static mime type is valid");
        let form = Form::new()
            .part("image", part)
            .text("prompt", prompt.to_string());

        let response = self
            .client
            .post(self.endpoint("api/generate"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let outcome = parse_generate_response(status, &body)?;
        info!(
            "Generation succeeded, scan code present: {}",
            outcome.scan_code.is_some()
        );
        Ok(outcome)
    }

    async fn check_health(&self) -> Result<HealthReport, GenerationError> {
        let response = self
            .client
            .get(self.endpoint("api/health"))
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let report: HealthReport = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        if !report.has_api_key {
            warn!("Generation backend reports no API key configured");
        }
        Ok(report)
    }
}

/// Classify one response into an outcome or a [`GenerationError`].
///
/// Non-2xx with a parseable `{error}` body carries the server's message;
/// non-2xx without one falls back to [`GENERIC_REJECTION`]. A 2xx body that
/// does not match the success shape is [`GenerationError::MalformedResponse`].
fn parse_generate_response(
    status: StatusCode,
    body: &[u8],
) -> Result<GenerationOutcome, GenerationError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_REJECTION.to_string());
        warn!("Generation rejected with status {}: {}", status, message);
        return Err(GenerationError::ServerRejected(message));
    }

    serde_json::from_slice(body).map_err(|e| {
        let preview = String::from_utf8_lossy(&body[..body.len().min(200)]).to_string();
        warn!("Unparseable success body: {} ({})", e, preview);
        GenerationError::MalformedResponse(e.to_string())
    })
}
