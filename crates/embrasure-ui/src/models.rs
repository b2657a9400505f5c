//! Toast payloads shared by the feedback core and the toast host.

pub use embrasure_api_models::{HttpFailure, UserRecord, new_user};

/// Display time for success toasts, in milliseconds.
pub const SUCCESS_DURATION_MS: u32 = 4_500;

/// Display time for warning toasts, in milliseconds.
pub const WARNING_DURATION_MS: u32 = 10_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation completed.
    Success,
    /// Operation failed or needs attention.
    Warning,
}

impl ToastKind {
    /// CSS modifier applied to the toast element.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Auto-dismiss delay for this kind.
    #[must_use]
    pub const fn default_duration_ms(self) -> u32 {
        match self {
            Self::Success => SUCCESS_DURATION_MS,
            Self::Warning => WARNING_DURATION_MS,
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Time on screen before auto-dismiss.
    pub duration_ms: u32,
}

impl Toast {
    /// Inputs of this toast's auto-dismiss timer.
    ///
    /// Depends on nothing but the toast itself, so other toasts arriving or
    /// leaving never restart it.
    #[must_use]
    pub const fn timer_key(&self) -> (u64, u32) {
        (self.id, self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{Toast, ToastKind};

    #[test]
    fn kinds_map_to_durations_and_classes() {
        assert_eq!(ToastKind::Success.default_duration_ms(), 4_500);
        assert_eq!(ToastKind::Warning.default_duration_ms(), 10_000);
        assert_eq!(ToastKind::Success.class(), "success");
        assert_eq!(ToastKind::Warning.class(), "warning");
    }

    #[test]
    fn timer_key_tracks_id_and_duration() {
        let toast = Toast {
            id: 7,
            message: "Saved".into(),
            kind: ToastKind::Success,
            duration_ms: ToastKind::Success.default_duration_ms(),
        };
        assert_eq!(toast.timer_key(), (7, 4_500));
        let edited = Toast {
            message: "Saved again".into(),
            ..toast.clone()
        };
        assert_eq!(edited.timer_key(), toast.timer_key());
    }
}
