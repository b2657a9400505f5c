//! Mount point that renders the store's overlay and toasts.

use crate::components::toast::ToastHost;
use crate::components::wait_overlay::WaitOverlay;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(FeedbackHost)]
pub(crate) fn feedback_host() -> Html {
    let overlay = use_selector(|store: &AppStore| store.feedback.overlay().visible().cloned());
    let toasts = use_selector(|store: &AppStore| store.feedback.notifier().toasts().to_vec());
    let on_dismiss = Callback::from(|id: u64| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.feedback.notifier_mut().dismiss(id));
    });

    html! {
        <>
            <WaitOverlay options={(*overlay).clone()} />
            <ToastHost toasts={(*toasts).clone()} {on_dismiss} />
        </>
    }
}
