use crate::domain::a002_product::ui::ProductGrid;
use crate::domain::a003_category::api::fetch_category_products;
use crate::layout::global_context::use_app_store;
use crate::shared::api_utils::api_base;
use crate::shared::config::use_config;
use crate::shared::i18n::{t, Label};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_category::CategoryId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

/// `/category/:id`: ranked product grid of one category.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();
    let params = use_params_map();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    let base = api_base(&config.api);
    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id")).unwrap_or_default();
        let category_id = match CategoryId::from_string(&raw_id) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("category route: {}", e);
                set_products.set(Vec::new());
                set_error.set(Some(e));
                set_is_loading.set(false);
                return;
            }
        };
        let base = base.clone();
        let token = store.access_token.get_untracked();
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_category_products(&base, &category_id, token.as_deref()).await {
                Ok(items) => {
                    set_products.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("category {}: {}", category_id.as_string(), e);
                    set_products.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    let policy = config.placement;

    view! {
        <div class="category-page">
            <a class="category-page__back" href="/">{move || t(Label::Home, store.locale())}</a>
            {move || {
                let locale = store.locale();
                if is_loading.get() {
                    return view! { <p class="loading">{t(Label::Loading, locale)}</p> }.into_any();
                }
                if error.get().is_some() {
                    return view! { <div class="error-message">{t(Label::LoadFailed, locale)}</div> }.into_any();
                }
                let ranked = products.with(|items| policy.rank_products(items));
                if ranked.is_empty() {
                    view! { <p class="empty-state">{t(Label::NoProducts, locale)}</p> }.into_any()
                } else {
                    view! { <ProductGrid products=ranked locale=locale row_len=policy.row_len /> }.into_any()
                }
            }}
        </div>
    }
}
