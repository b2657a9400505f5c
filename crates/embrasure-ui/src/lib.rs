#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Embrasure console feedback helpers.
//! Wait overlay, toast notifications and the blank user factory shared by the
//! directory console views. The core is DOM-free; the Yew surface is wasm-only.

pub mod core;
pub mod models;

pub use crate::core::config::{ApiConfig, ConfigError};
pub use crate::core::feedback::{
    Feedback, LoadingKind, WaitHandle, WaitOptions, compose_error_message,
};
pub use crate::core::store::{AppStore, StoreFeedback};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::{FeedbackHandle, run_app, use_api_config, use_feedback};

#[cfg(test)]
mod tests {
    use crate::models::{HttpFailure, new_user};
    use crate::{AppStore, compose_error_message};

    #[test]
    fn create_user_flow_round_trip() {
        let mut store = AppStore::default();
        let mut user = new_user();
        user.user_id = Some("jdoe".into());

        store.feedback.show_wait();
        assert!(store.feedback.is_waiting());
        store.feedback.close_wait();
        let user_id = user.user_id.as_deref().unwrap_or_default();
        store.feedback.show_success(format!("User {user_id} created"));

        let toasts = store.feedback.notifier().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "User jdoe created");
        assert!(!store.feedback.is_waiting());
    }

    #[test]
    fn error_message_helper_matches_controller() {
        let failure = HttpFailure::with_detail("duplicate entry");
        assert_eq!(
            compose_error_message(Some("Create failed"), Some(&failure)),
            "Create failed (duplicate entry)"
        );
        assert_eq!(compose_error_message(None, None), "");
    }
}
