//! The workflow controller: session ownership, capture sequencing, and the
//! single-flight generation exchange.
//!
//! The presentation layer is an external collaborator that invokes the typed
//! actions below and renders the session it reads back. Every failure is
//! handled here and converted into one notification; nothing escapes as an
//! unhandled fault, so the booth stays interactable after any error.

use tracing::{debug, info, warn};

use crate::capture::{decode_upload, CountdownTimer, LiveStream, MediaSource};
use crate::error::{BoothError, CameraError};
use crate::generation::Generate;
use crate::prompt::{self, Program};
use crate::workflow::notify::{Celebration, NoticeKind, Notifier, TracingCelebration, TracingNotifier};
use crate::workflow::session::{Phase, Session};

pub const DEFAULT_DISPLAY_NAME: &str = "Guest";

pub struct WorkflowController<G> {
    session: Session,
    media: Box<dyn MediaSource>,
    stream: Option<Box<dyn LiveStream>>,
    countdown: CountdownTimer,
    generator: G,
    notifier: Box<dyn Notifier>,
    celebration: Box<dyn Celebration>,
    default_display_name: String,
}

impl<G: Generate> WorkflowController<G> {
    pub fn new(generator: G, media: Box<dyn MediaSource>) -> Self {
        Self {
            session: Session::new(),
            media,
            stream: None,
            countdown: CountdownTimer::new(),
            generator,
            notifier: Box::new(TracingNotifier),
            celebration: Box::new(TracingCelebration),
            default_display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_celebration(mut self, celebration: Box<dyn Celebration>) -> Self {
        self.celebration = celebration;
        self
    }

    pub fn with_countdown(mut self, countdown: CountdownTimer) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn with_default_display_name(mut self, name: &str) -> Self {
        self.default_display_name = name.to_string();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    // --- attribute actions -------------------------------------------------

    pub fn set_display_name(&mut self, name: &str) {
        self.session.display_name = Some(name.to_string());
        self.enter_attribute_selection();
    }

    pub fn select_program(&mut self, program: Program) {
        info!("Program selected: {}", program.id);
        self.session.program = Some(program);
        self.enter_attribute_selection();
    }

    pub fn select_skin_tone(&mut self, tone: &str) {
        self.session.skin_tone = Some(tone.to_string());
        self.enter_attribute_selection();
    }

    pub fn select_frame_style(&mut self, style: &str) {
        self.session.frame_style = Some(style.to_string());
        self.enter_attribute_selection();
    }

    fn enter_attribute_selection(&mut self) {
        if self.session.phase == Phase::Idle {
            self.session.phase = Phase::AttributeSelection;
        }
    }

    // --- capture -----------------------------------------------------------

    /// Open the camera and enter the capturing sub-flow. On a classified
    /// acquisition failure the camera view is never entered and the operator
    /// sees a corrective notice.
    pub fn open_camera(&mut self) {
        if !self.image_entry_allowed() {
            debug!("open_camera ignored in phase {:?}", self.session.phase);
            return;
        }
        if !self.media.is_supported() {
            self.notifier
                .notify(NoticeKind::Error, &CameraError::Unsupported.to_string());
            return;
        }

        match self.media.acquire_stream() {
            Ok(stream) => {
                self.stream = Some(stream);
                self.session.phase = Phase::Capturing;
                info!("Camera opened");
            }
            Err(err) => {
                warn!("Camera acquisition failed: {}", err);
                self.notifier.notify(NoticeKind::Error, &err.to_string());
            }
        }
    }

    /// Begin the capture countdown. One timer per capture attempt; starting
    /// again restarts it.
    pub fn start_countdown<T, C>(&mut self, on_tick: T, on_complete: C)
    where
        T: FnMut(u32) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        if self.session.phase != Phase::Capturing {
            debug!("start_countdown ignored in phase {:?}", self.session.phase);
            return;
        }
        self.countdown.start(on_tick, on_complete);
    }

    /// Sample a still frame from the open stream. The stream is always
    /// released afterwards, on success and on failure alike.
    pub fn capture_still(&mut self) {
        if self.session.phase != Phase::Capturing {
            debug!("capture_still ignored in phase {:?}", self.session.phase);
            return;
        }
        self.countdown.cancel();

        let Some(mut stream) = self.stream.take() else {
            self.session.phase = Phase::AttributeSelection;
            return;
        };

        let sampled = stream.capture_still();
        stream.release();

        match sampled {
            Ok(image) => {
                info!("Captured still frame: {}x{}", image.width, image.height);
                self.session.captured_image = Some(image);
                self.session.phase = Phase::ImageReady;
            }
            Err(err) => {
                warn!("Still capture failed: {}", err);
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                self.session.phase = Phase::AttributeSelection;
            }
        }
    }

    /// Close the camera view without capturing. Idempotent.
    pub fn cancel_capture(&mut self) {
        self.countdown.cancel();
        self.release_stream();
        if self.session.phase == Phase::Capturing {
            self.session.phase = Phase::AttributeSelection;
        }
    }

    /// Take an operator-chosen file instead of a live capture. A file that is
    /// not image-decodable is rejected and the prior state is unchanged.
    pub fn upload_file(&mut self, bytes: &[u8]) {
        if !self.image_entry_allowed() {
            debug!("upload_file ignored in phase {:?}", self.session.phase);
            return;
        }

        match decode_upload(bytes) {
            Ok(image) => {
                self.session.captured_image = Some(image);
                self.session.phase = Phase::ImageReady;
            }
            Err(err) => {
                warn!("Upload rejected: {}", err);
                self.notifier.notify(NoticeKind::Error, &err.to_string());
            }
        }
    }

    /// Discard the captured image and return to attribute selection.
    pub fn remove_image(&mut self) {
        self.session.captured_image = None;
        if matches!(self.session.phase, Phase::ImageReady) {
            self.session.phase = Phase::AttributeSelection;
        }
    }

    fn image_entry_allowed(&self) -> bool {
        matches!(
            self.session.phase,
            Phase::Idle | Phase::AttributeSelection | Phase::ImageReady
        )
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
    }

    // --- generation --------------------------------------------------------

    /// Submit the captured image for generation.
    ///
    /// Local validation first: without an image the backend is never
    /// contacted. At most one request is in flight; a submit while one is
    /// already running is dropped, never queued. The prompt is rebuilt fresh
    /// on every attempt. On failure the captured image is preserved so the
    /// operator can retry without recapturing.
    pub async fn submit(&mut self) {
        if self.session.phase == Phase::Generating {
            debug!("submit dropped: a generation request is already in flight");
            return;
        }

        let image = match &self.session.captured_image {
            Some(image) if !image.is_empty() => image.clone(),
            _ => {
                self.notifier
                    .notify(NoticeKind::Error, &BoothError::MissingImage.to_string());
                return;
            }
        };

        let name = self
            .session
            .display_name_or(&self.default_display_name)
            .to_string();
        let built = prompt::build(&name, self.session.program.as_ref());
        self.session.built_prompt = Some(built.clone());

        self.session.result = None;
        self.session.phase = Phase::Generating;
        match self.generator.generate(&image, &built).await {
            Ok(outcome) => {
                self.session.result = Some(outcome);
                self.session.phase = Phase::Result;
                self.notifier
                    .notify(NoticeKind::Success, "Portrait generated successfully!");
                self.celebration.on_result();
            }
            Err(err) => {
                self.session.phase = Phase::ImageReady;
                self.notifier.notify(NoticeKind::Error, &err.to_string());
            }
        }
    }

    // --- lifecycle ---------------------------------------------------------

    /// Clear the session for the next operator.
    pub fn reset(&mut self) {
        self.countdown.cancel();
        self.release_stream();
        self.session.reset();
        info!("Session reset");
    }

    /// Probe the backend once at startup. A missing API key is a
    /// configuration warning, not a workflow failure; transport errors are
    /// only logged.
    pub async fn startup_health_check(&mut self) {
        match self.generator.check_health().await {
            Ok(report) if !report.has_api_key => {
                self.notifier.notify(
                    NoticeKind::Warning,
                    "The generation service has no API key configured. Set it up before opening the booth.",
                );
            }
            Ok(_) => debug!("Backend health check passed"),
            Err(err) => warn!("Backend health check failed: {}", err),
        }
    }
}
