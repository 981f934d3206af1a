use crate::layout::global_context::use_app_store;
use crate::shared::i18n::{t, Label};
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="not-found">
            <h1>{move || t(Label::NotFound, store.locale())}</h1>
            <a href="/">{move || t(Label::Home, store.locale())}</a>
        </div>
    }
}
