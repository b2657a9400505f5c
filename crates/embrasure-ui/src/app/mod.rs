//! App shell: feedback host mount and the hook views use to drive it.

use crate::components::feedback_host::FeedbackHost;
use crate::core::config::ApiConfig;
use crate::core::store::AppStore;
use crate::models::HttpFailure;
use preferences::load_api_config;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;

/// Feedback operations bound to the app store.
#[derive(Clone)]
pub struct FeedbackHandle {
    dispatch: Dispatch<AppStore>,
}

impl FeedbackHandle {
    /// Open the blocking wait overlay.
    pub fn show_wait(&self) {
        self.dispatch.reduce_mut(|store| store.feedback.show_wait());
    }

    /// Dismiss the wait overlay if shown.
    pub fn close_wait(&self) {
        self.dispatch.reduce_mut(|store| store.feedback.close_wait());
    }

    /// Show a success toast.
    pub fn show_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.dispatch
            .reduce_mut(move |store| store.feedback.show_success(message));
    }

    /// Close the overlay and show a warning toast for a failed call.
    pub fn show_err(&self, message: Option<&str>, failure: Option<&HttpFailure>) {
        let message = message.map(str::to_owned);
        let failure = failure.cloned();
        self.dispatch.reduce_mut(move |store| {
            store
                .feedback
                .show_err(message.as_deref(), failure.as_ref());
        });
    }
}

/// Feedback operations for the current component.
#[hook]
pub fn use_feedback() -> FeedbackHandle {
    FeedbackHandle {
        dispatch: Dispatch::<AppStore>::new(),
    }
}

/// REST configuration for the current component.
#[hook]
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmbrasureAppProps {
    /// Console views rendered under the feedback host.
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Root component: provides [`ApiConfig`] and mounts the feedback host.
#[function_component(EmbrasureApp)]
pub(crate) fn embrasure_app(props: &EmbrasureAppProps) -> Html {
    let api_config = use_memo(|_| load_api_config(), ());

    html! {
        <ContextProvider<ApiConfig> context={(*api_config).clone()}>
            {props.children.clone()}
            <FeedbackHost />
        </ContextProvider<ApiConfig>>
    }
}

/// Mount the console shell on `#root`, or the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<EmbrasureApp>::with_root(root).render();
    } else {
        yew::Renderer::<EmbrasureApp>::new().render();
    }
}
