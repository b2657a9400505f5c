//! Full-screen blocking overlay shown while a request is in flight.

use crate::components::loading::Loading;
use crate::core::feedback::WaitOptions;
use gloo::console;
use yew::prelude::*;
use yew::web_sys::HtmlElement;

#[derive(Properties, PartialEq)]
pub(crate) struct WaitOverlayProps {
    /// Overlay to render; nothing is drawn when unset.
    pub options: Option<WaitOptions>,
}

#[function_component(WaitOverlay)]
pub(crate) fn wait_overlay(props: &WaitOverlayProps) -> Html {
    let layer_ref = use_node_ref();
    let lock = props.options.as_ref().is_some_and(|options| options.lock);
    {
        let layer_ref = layer_ref.clone();
        use_effect_with_deps(
            move |&lock: &bool| {
                if lock
                    && let Some(layer) = layer_ref.cast::<HtmlElement>()
                    && let Err(err) = layer.focus()
                {
                    console::error!("wait overlay focus failed", err);
                }
                || ()
            },
            lock,
        );
    }

    let Some(options) = props.options.as_ref() else {
        return html! {};
    };
    let mut style = format!("background-color: {};", options.background);
    if options.fullscreen {
        style.push_str(" position: fixed; inset: 0; z-index: 2000;");
    }
    // While locked the layer holds focus and eats every key and click.
    let swallow_click = Callback::from(move |event: MouseEvent| {
        if lock {
            event.prevent_default();
            event.stop_propagation();
        }
    });
    let swallow_key = Callback::from(move |event: KeyboardEvent| {
        if lock {
            event.prevent_default();
            event.stop_propagation();
        }
    });
    let classes = classes!(
        "wait-overlay",
        options.fullscreen.then_some("is-fullscreen"),
        options.lock.then_some("is-locked")
    );

    html! {
        <div
            ref={layer_ref}
            class={classes}
            style={style}
            tabindex="-1"
            aria-busy="true"
            aria-modal={lock.then_some(AttrValue::Static("true"))}
            onclick={swallow_click}
            onkeydown={swallow_key}
        >
            <div class="wait-overlay__content">
                <Loading kind={options.spinner} label={AttrValue::from(options.text)} />
                <p class="wait-overlay__text">{options.text}</p>
            </div>
        </div>
    }
}
