//! Spinner atom.

use crate::core::feedback::LoadingKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingProps {
    #[prop_or_default]
    pub kind: LoadingKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(Loading)]
pub(crate) fn loading(props: &LoadingProps) -> Html {
    let classes = classes!("loading", props.kind.class(), "loading-lg", props.class.clone());
    html! {
        <span class={classes} role="status" aria-label={props.label.clone()} />
    }
}
