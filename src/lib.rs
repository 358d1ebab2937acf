pub mod capture;
pub mod config;
pub mod error;
pub mod generation;
pub mod presenter;
pub mod prompt;
pub mod workflow;

pub use capture::{CapturedImage, CountdownTimer};
pub use config::BoothConfig;
pub use error::{BoothError, CameraError, GenerationError};
pub use generation::{Generate, GenerationClient, GenerationOutcome};
pub use prompt::Program;
pub use workflow::{Phase, Session, WorkflowController};

/// Install the default log subscriber. Call once from the kiosk shell.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
