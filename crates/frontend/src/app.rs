use crate::layout::global_context::AppStore;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config_or_default;
use crate::shared::viewport::provide_viewport;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Configuration and the app store are injected once, here.
    provide_context(load_config_or_default());
    provide_context(AppStore::restore());
    provide_viewport();

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
