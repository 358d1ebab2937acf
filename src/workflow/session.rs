//! The per-user mutable context for one pass through the booth.

use serde::Serialize;

use crate::capture::CapturedImage;
use crate::generation::GenerationOutcome;
use crate::prompt::Program;

/// Workflow controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    AttributeSelection,
    Capturing,
    ImageReady,
    Generating,
    Result,
}

/// Selections, captured image, and result for the current operator.
///
/// Owned by the [`WorkflowController`](crate::workflow::WorkflowController)
/// and mutated only through its action interface. `result` is populated only
/// while `phase` is [`Phase::Result`].
#[derive(Debug, Clone)]
pub struct Session {
    pub display_name: Option<String>,
    pub program: Option<Program>,
    pub skin_tone: Option<String>,
    pub frame_style: Option<String>,
    pub captured_image: Option<CapturedImage>,
    pub built_prompt: Option<String>,
    pub result: Option<GenerationOutcome>,
    pub phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            display_name: None,
            program: None,
            skin_tone: None,
            frame_style: None,
            captured_image: None,
            built_prompt: None,
            result: None,
            phase: Phase::Idle,
        }
    }

    /// The name used at generation time: the operator's entry, or the booth
    /// default when none was supplied.
    pub fn display_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => default,
        }
    }

    /// Return to the initial empty form for the next operator.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
