//! The platform media-capture boundary.
//!
//! [`MediaSource`] yields a live stream, [`LiveStream`] samples still frames
//! from it. The hardware-backed implementation sits behind the
//! `camera-nokhwa` feature; everything above this module only sees the
//! traits, so kiosks without a camera stack (and the test suite) run against
//! stub sources.

use super::CapturedImage;
use crate::error::CameraError;

/// A source of live video streams, usually the front-facing camera.
pub trait MediaSource {
    /// Whether the platform has any capture capability at all. Callers must
    /// not attempt acquisition when this is false.
    fn is_supported(&self) -> bool {
        true
    }

    /// Request a live stream. Acquisition awaits platform permission and
    /// hardware startup; failures are classified into [`CameraError`].
    fn acquire_stream(&mut self) -> Result<Box<dyn LiveStream>, CameraError>;
}

/// An open video stream. Exactly one exists per capture attempt; it is
/// released on capture completion, explicit close, or workflow reset.
pub trait LiveStream {
    /// Sample the current frame into a still image at the stream's native
    /// resolution. Fails only when the stream has no active video track.
    fn capture_still(&mut self) -> Result<CapturedImage, CameraError>;

    /// Stop all tracks. Idempotent; safe on an already-released stream.
    fn release(&mut self);
}

/// Classify a platform capture failure from its error text.
///
/// Capture backends report failures as strings; the recognizable phrases
/// ("denied", "busy", "not found") are stable across the common backends.
pub fn classify_camera_failure(detail: &str) -> CameraError {
    let lower = detail.to_lowercase();
    if lower.contains("denied") || lower.contains("permission") || lower.contains("not allowed") {
        CameraError::PermissionDenied
    } else if lower.contains("not found") || lower.contains("no device") || lower.contains("no such")
    {
        CameraError::DeviceNotFound
    } else if lower.contains("busy") || lower.contains("in use") {
        CameraError::DeviceBusy
    } else {
        CameraError::Unknown(detail.to_string())
    }
}

#[cfg(feature = "camera-nokhwa")]
pub use nokhwa_source::NokhwaSource;

#[cfg(feature = "camera-nokhwa")]
mod nokhwa_source {
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
    use nokhwa::Camera;
    use tracing::{info, warn};

    use super::{classify_camera_failure, LiveStream, MediaSource};
    use crate::capture::CapturedImage;
    use crate::error::CameraError;

    /// Camera access through nokhwa. Index 0 is the built-in front-facing
    /// camera on the kiosk hardware.
    pub struct NokhwaSource {
        index: u32,
    }

    impl NokhwaSource {
        pub fn new(index: u32) -> Self {
            Self { index }
        }
    }

    impl MediaSource for NokhwaSource {
        fn is_supported(&self) -> bool {
            nokhwa::native_api_backend().is_some()
        }

        fn acquire_stream(&mut self) -> Result<Box<dyn LiveStream>, CameraError> {
            if !self.is_supported() {
                return Err(CameraError::Unsupported);
            }

            let requested =
                RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
            let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
                .map_err(|e| classify_camera_failure(&e.to_string()))?;
            camera
                .open_stream()
                .map_err(|e| classify_camera_failure(&e.to_string()))?;

            info!("Opened camera stream: {}", camera.info().human_name());
            Ok(Box::new(NokhwaStream {
                camera: Some(camera),
            }))
        }
    }

    struct NokhwaStream {
        camera: Option<Camera>,
    }

    impl LiveStream for NokhwaStream {
        fn capture_still(&mut self) -> Result<CapturedImage, CameraError> {
            let camera = self
                .camera
                .as_mut()
                .ok_or_else(|| CameraError::Unknown("stream has no active video track".to_string()))?;

            let frame = camera
                .frame()
                .map_err(|e| classify_camera_failure(&e.to_string()))?;
            let decoded = frame
                .decode_image::<RgbFormat>()
                .map_err(|e| classify_camera_failure(&e.to_string()))?;

            let (width, height) = decoded.dimensions();
            let raster = image::RgbImage::from_raw(width, height, decoded.into_raw())
                .ok_or_else(|| CameraError::Unknown("frame buffer size mismatch".to_string()))?;

            CapturedImage::from_image(&image::DynamicImage::ImageRgb8(raster))
                .map_err(CameraError::Unknown)
        }

        fn release(&mut self) {
            if let Some(mut camera) = self.camera.take() {
                if let Err(e) = camera.stop_stream() {
                    warn!("Failed to stop camera stream: {}", e);
                }
                info!("Camera stream released");
            }
        }
    }

    impl Drop for NokhwaStream {
        fn drop(&mut self) {
            self.release();
        }
    }
}
