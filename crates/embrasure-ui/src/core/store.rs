//! App-wide yewdux store for feedback state.
//!
//! # Design
//! - The overlay layer and the toast queue are plain data so reducers stay
//!   testable outside wasm.
//! - The overlay layer is a single full-screen surface: opening while active
//!   swaps the handle it answers to, closing a stale handle is ignored.

use crate::core::feedback::{
    Feedback, Notification, Notifier, OverlayService, WaitHandle, WaitOptions,
};
use crate::models::Toast;
use tracing::debug;
use yewdux::store::Store;

/// Full-screen overlay state rendered by the wait overlay component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayLayer {
    next_id: u64,
    active: Option<(WaitHandle, WaitOptions)>,
}

impl OverlayLayer {
    /// Options of the visible overlay, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&WaitOptions> {
        self.active.as_ref().map(|(_, options)| options)
    }
}

impl OverlayService for OverlayLayer {
    fn open(&mut self, options: &WaitOptions) -> WaitHandle {
        self.next_id += 1;
        let handle = WaitHandle::new(self.next_id);
        self.active = Some((handle, options.clone()));
        handle
    }

    fn close(&mut self, handle: WaitHandle) {
        let is_active = self
            .active
            .as_ref()
            .is_some_and(|(current, _)| *current == handle);
        if is_active {
            self.active = None;
        } else {
            debug!(handle = handle.id(), "ignoring close for inactive overlay");
        }
    }
}

/// Toasts waiting on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Toasts currently on screen.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: notification.message,
            kind: notification.kind,
            duration_ms: notification.duration_ms,
        });
    }
}

/// Feedback controller backed by store data.
pub type StoreFeedback = Feedback<OverlayLayer, ToastQueue>;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Wait overlay and toast state.
    pub feedback: StoreFeedback,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HttpFailure, ToastKind};

    #[test]
    fn overlay_visible_only_while_waiting() {
        let mut store = AppStore::default();
        assert!(store.feedback.overlay().visible().is_none());
        store.feedback.show_wait();
        assert_eq!(
            store.feedback.overlay().visible().map(|o| o.text),
            Some("Loading")
        );
        store.feedback.close_wait();
        assert!(store.feedback.overlay().visible().is_none());
    }

    #[test]
    fn double_show_keeps_single_layer() {
        let mut store = AppStore::default();
        store.feedback.show_wait();
        store.feedback.show_wait();
        assert!(store.feedback.overlay().visible().is_some());
        store.feedback.close_wait();
        assert!(store.feedback.overlay().visible().is_none());
    }

    #[test]
    fn stale_handle_close_is_ignored() {
        let mut layer = OverlayLayer::default();
        let first = layer.open(&WaitOptions::default());
        let _second = layer.open(&WaitOptions::default());
        layer.close(first);
        assert!(layer.visible().is_some());
    }

    #[test]
    fn toasts_queue_with_ids_and_durations() {
        let mut store = AppStore::default();
        store.feedback.show_success("Saved");
        store
            .feedback
            .show_err(Some("Failed"), Some(&HttpFailure::with_detail("bad input")));
        let toasts = store.feedback.notifier().toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].id, 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].duration_ms, 4_500);
        assert_eq!(toasts[1].id, 2);
        assert_eq!(toasts[1].kind, ToastKind::Warning);
        assert_eq!(toasts[1].message, "Failed (bad input)");
        assert_eq!(toasts[1].duration_ms, 10_000);
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut store = AppStore::default();
        store.feedback.show_success("one");
        store.feedback.show_success("two");
        store.feedback.notifier_mut().dismiss(1);
        store.feedback.notifier_mut().dismiss(99);
        let toasts = store.feedback.notifier().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "two");
    }

    #[test]
    fn timers_unaffected_by_neighbouring_toasts() {
        let mut store = AppStore::default();
        store.feedback.show_err(Some("Failed"), None);
        let warning = store.feedback.notifier().toasts()[0].timer_key();

        store.feedback.show_success("Saved");
        let success = store.feedback.notifier().toasts()[1].timer_key();
        assert_eq!(store.feedback.notifier().toasts()[0].timer_key(), warning);
        assert_ne!(success, warning);

        store.feedback.notifier_mut().dismiss(success.0);
        let remaining = store.feedback.notifier().toasts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].timer_key(), (1, 10_000));
    }
}
