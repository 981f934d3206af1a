use crate::layout::global_context::use_app_store;
use crate::shared::i18n::{t, Label};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    view! {
        <header class="storefront-header">
            <a class="storefront-header__brand" href="/">
                {move || t(Label::Home, store.locale())}
            </a>

            <nav class="storefront-header__actions">
                <span class="storefront-header__counter" title=move || t(Label::Wishlist, store.locale())>
                    "♥ " {move || store.wishlist_count()}
                </span>
                <span class="storefront-header__counter" title=move || t(Label::Cart, store.locale())>
                    "🛒 " {move || store.cart_count.get()}
                </span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| store.toggle_locale()
                >
                    {move || t(Label::SwitchLanguage, store.locale())}
                </Button>
            </nav>
        </header>
    }
}
