use thiserror::Error;

/// Failures of the platform media-capture boundary.
///
/// Each variant renders as the corrective message shown to the operator when
/// the camera modal has to be closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera permission was denied. Allow camera access and try again.")]
    PermissionDenied,

    #[error("No connected camera was detected. If you are on a PC, plug in a webcam.")]
    DeviceNotFound,

    #[error("The camera is in use by another application. Close it and try again.")]
    DeviceBusy,

    #[error("Camera capture is not available in this environment.")]
    Unsupported,

    #[error("Could not access the camera: {0}")]
    Unknown(String),
}

/// Failures of a single generation request. One attempt per invocation; the
/// controller decides whether the operator retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Could not reach the generation service: {0}")]
    Network(String),

    /// Non-2xx status. Carries the server-supplied message when the error
    /// body was parseable, a generic message otherwise.
    #[error("{0}")]
    ServerRejected(String),

    #[error("The generation service returned an unreadable response: {0}")]
    MalformedResponse(String),
}

/// Top-level error taxonomy of the booth workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoothError {
    /// Submit was invoked without a captured image. Recovered locally, the
    /// backend is never contacted.
    #[error("A photo is required before generating")]
    MissingImage,

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// An uploaded file was not image-decodable.
    #[error("The selected file is not a readable image: {0}")]
    InvalidImage(String),
}

impl From<BoothError> for String {
    fn from(err: BoothError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_errors_carry_corrective_messages() {
        assert!(CameraError::PermissionDenied.to_string().contains("permission"));
        assert!(CameraError::DeviceNotFound.to_string().contains("webcam"));
        assert!(CameraError::DeviceBusy.to_string().contains("another application"));
    }

    #[test]
    fn server_rejection_renders_message_verbatim() {
        let err = GenerationError::ServerRejected("quota exhausted".to_string());
        assert_eq!(err.to_string(), "quota exhausted");
    }

    #[test]
    fn booth_error_converts_to_string() {
        let msg: String = BoothError::MissingImage.into();
        assert_eq!(msg, "A photo is required before generating");
    }

    #[test]
    fn nested_errors_render_transparently() {
        let err = BoothError::from(CameraError::Unsupported);
        assert_eq!(err.to_string(), CameraError::Unsupported.to_string());
    }
}
