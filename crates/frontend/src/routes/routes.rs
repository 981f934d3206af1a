use crate::domain::a003_category::ui::CategoryPage;
use crate::layout::header::Header;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="storefront-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/category/:id") view=CategoryPage />
                </Routes>
            </main>
        </Router>
    }
}
