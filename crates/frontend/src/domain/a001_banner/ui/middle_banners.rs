use super::banner_image::BannerImage;
use crate::layout::global_context::use_app_store;
use crate::shared::config::use_config;
use crate::shared::viewport::use_viewport;
use contracts::domain::a001_banner::Banner;
use contracts::enums::BannerType;
use leptos::prelude::*;

/// Strip of `middle` banners, cut into rows and ordered per row.
///
/// Takes the full banner list; selection (with the narrow-viewport limit)
/// happens here so it follows resizes.
#[component]
pub fn MiddleBanners(#[prop(into)] banners: Signal<Vec<Banner>>) -> impl IntoView {
    let store = use_app_store();
    let policy = use_config().placement;
    let viewport = use_viewport();

    let rows = move || {
        let selected = banners.with(|all| policy.select_banners(all, BannerType::Middle, viewport.get()));
        policy.middle_rows(&selected, store.is_arabic())
    };

    view! {
        <section class="middle-banners">
            {move || {
                rows()
                    .into_iter()
                    .map(|row| {
                        // Order is set by the data, not by the page direction
                        view! {
                            <div class="middle-banners__row" dir="ltr">
                                {row
                                    .into_iter()
                                    .map(|banner| view! { <BannerImage banner=banner /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
