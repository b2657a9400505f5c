//! Blocking wait overlay and toast notifications.
//!
//! # Design
//! - The wait slot is owned by a [`Feedback`] value held by whoever composes
//!   the UI, never by module state.
//! - Rendering sits behind [`OverlayService`] and [`Notifier`] so the same
//!   controller drives the yewdux store and the test fakes.
//! - A second `show_wait` replaces the handle without closing the first one;
//!   overlay services are expected to treat the full-screen layer as a single
//!   surface.

use crate::models::{HttpFailure, ToastKind};
use tracing::debug;

/// Caption shown under the spinner.
pub const WAIT_CAPTION: &str = "Loading";

/// Spinner animation drawn in the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingKind {
    /// Rotating arc.
    #[default]
    Spinner,
    /// Pulsing dots.
    Dots,
    /// Bouncing bars.
    Bars,
    /// Rotating ring.
    Ring,
}

impl LoadingKind {
    /// CSS class selecting the animation.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Spinner => "loading-spinner",
            Self::Dots => "loading-dots",
            Self::Bars => "loading-bars",
            Self::Ring => "loading-ring",
        }
    }
}

/// Fixed presentation of the wait overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitOptions {
    /// Block pointer and keyboard input behind the overlay.
    pub lock: bool,
    /// Caption text.
    pub text: &'static str,
    /// Spinner animation.
    pub spinner: LoadingKind,
    /// Backdrop color.
    pub background: &'static str,
    /// Cover the whole viewport.
    pub fullscreen: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            lock: true,
            text: WAIT_CAPTION,
            spinner: LoadingKind::Spinner,
            background: "rgba(0, 0, 0, 0)",
            fullscreen: true,
        }
    }
}

/// Reference to an overlay opened by an [`OverlayService`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WaitHandle {
    id: u64,
}

impl WaitHandle {
    /// Wrap a service-assigned identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    /// Service-assigned identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.id
    }
}

/// Something that can put a blocking overlay on screen and take it down.
pub trait OverlayService {
    /// Display an overlay and return its handle.
    fn open(&mut self, options: &WaitOptions) -> WaitHandle;
    /// Dismiss the overlay behind `handle`.
    fn close(&mut self, handle: WaitHandle);
}

/// A transient message for the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Styling and severity.
    pub kind: ToastKind,
    /// Text shown to the operator.
    pub message: String,
    /// Time on screen before auto-dismiss.
    pub duration_ms: u32,
}

/// Something that can show toast notifications.
pub trait Notifier {
    /// Show `notification`.
    fn notify(&mut self, notification: Notification);
}

/// Build the text of an error toast.
///
/// A missing message becomes empty. When the failure carries a response body
/// its detail is appended in parentheses.
#[must_use]
pub fn compose_error_message(message: Option<&str>, failure: Option<&HttpFailure>) -> String {
    let mut text = message.unwrap_or_default().to_string();
    if let Some(suffix) = failure.and_then(|failure| failure.detail().suffix()) {
        text.push_str(&suffix);
    }
    text
}

/// Wait overlay slot plus the services it drives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback<O, N> {
    overlay: O,
    notifier: N,
    wait: Option<WaitHandle>,
}

impl<O: OverlayService, N: Notifier> Feedback<O, N> {
    /// Compose a controller over the given services, starting idle.
    #[must_use]
    pub const fn new(overlay: O, notifier: N) -> Self {
        Self {
            overlay,
            notifier,
            wait: None,
        }
    }

    /// Handle of the overlay currently tracked by the slot.
    #[must_use]
    pub const fn wait_handle(&self) -> Option<WaitHandle> {
        self.wait
    }

    /// Whether a wait overlay is being tracked.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.wait.is_some()
    }

    /// Overlay service.
    #[must_use]
    pub const fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Notification service.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable notification service, for dismissals driven by the view.
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Open the full-screen wait overlay.
    pub fn show_wait(&mut self) {
        let handle = self.overlay.open(&WaitOptions::default());
        if let Some(previous) = self.wait.replace(handle) {
            debug!(
                previous = previous.id(),
                current = handle.id(),
                "wait overlay replaced while active"
            );
        }
    }

    /// Dismiss the wait overlay if one is tracked.
    pub fn close_wait(&mut self) {
        if let Some(handle) = self.wait.take() {
            self.overlay.close(handle);
        }
    }

    /// Show a success toast.
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notifier.notify(Notification {
            kind: ToastKind::Success,
            message: message.into(),
            duration_ms: ToastKind::Success.default_duration_ms(),
        });
    }

    /// Close any wait overlay and show a warning toast for a failed call.
    pub fn show_err(&mut self, message: Option<&str>, failure: Option<&HttpFailure>) {
        self.close_wait();
        let message = compose_error_message(message, failure);
        debug!(%message, "showing error toast");
        self.notifier.notify(Notification {
            kind: ToastKind::Warning,
            message,
            duration_ms: ToastKind::Warning.default_duration_ms(),
        });
    }
}
