//! Session state and the workflow controller.

pub mod controller;
pub mod notify;
pub mod session;

pub use controller::WorkflowController;
pub use notify::{Celebration, Notice, NoticeKind, Notifier, TracingCelebration, TracingNotifier};
pub use session::{Phase, Session};
