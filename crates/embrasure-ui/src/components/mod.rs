//! Yew components rendering feedback state.
pub(crate) mod feedback_host;
pub(crate) mod loading;
pub(crate) mod toast;
pub(crate) mod wait_overlay;
