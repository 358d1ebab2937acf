//! User-facing notifications and the success celebration hook.
//!
//! The controller converts every handled error into one short-lived notice;
//! the presentation layer decides how to show it (the kiosk renders a toast).

use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// A recorded notification, mainly useful to tests and headless hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Boundary through which the controller surfaces short-lived notices.
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}

/// Default notifier: routes notices into the log stream.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => info!("{}", message),
            NoticeKind::Warning => warn!("{}", message),
            NoticeKind::Error => error!("{}", message),
        }
    }
}

/// Fire-and-forget side effect on entering the result state. No return value
/// is consulted and no failure propagates into workflow state.
pub trait Celebration {
    fn on_result(&self);
}

/// Default celebration: a log line. Kiosk hosts swap in confetti.
pub struct TracingCelebration;

impl Celebration for TracingCelebration {
    fn on_result(&self) {
        info!("Portrait generated, celebration triggered");
    }
}
