use crate::domain::a001_banner::api::fetch_banners;
use crate::domain::a001_banner::ui::{BannerGroupView, MainSlider, MiddleBanners};
use crate::domain::a003_category::api::fetch_categories;
use crate::domain::a003_category::ui::CategorySection;
use crate::layout::global_context::use_app_store;
use crate::shared::api_utils::api_base;
use crate::shared::config::use_config;
use crate::shared::i18n::{t, Label};
use crate::shared::viewport::use_viewport;
use contracts::domain::a001_banner::Banner;
use contracts::domain::a003_category::Category;
use contracts::enums::BannerType;
use contracts::shared::placement::{RenderEntry, RenderPlan};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Message for the categories region when the plan holds no category.
///
/// Banner groups of the plan are rendered regardless.
fn categories_notice(plan: &RenderPlan, is_loading: bool, failed: bool) -> Option<Label> {
    if plan.categories().next().is_some() {
        return None;
    }
    if failed {
        Some(Label::LoadFailed)
    } else if is_loading {
        Some(Label::Loading)
    } else {
        Some(Label::NothingToShow)
    }
}

/// Storefront home: slider, middle banners and category sections
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();
    let viewport = use_viewport();

    let (banners, set_banners) = signal(Vec::<Banner>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (banners_error, set_banners_error) = signal::<Option<String>>(None);
    let (categories_error, set_categories_error) = signal::<Option<String>>(None);
    let (categories_loading, set_categories_loading) = signal(true);

    let base = api_base(&config.api);
    let token = store.access_token.get_untracked();
    {
        let base = base.clone();
        let token = token.clone();
        spawn_local(async move {
            match fetch_banners(&base, token.as_deref()).await {
                Ok(items) => set_banners.set(items),
                Err(e) => {
                    log::error!("banners: {}", e);
                    set_banners_error.set(Some(e));
                }
            }
        });
    }
    spawn_local(async move {
        match fetch_categories(&base, token.as_deref()).await {
            Ok(items) => set_categories.set(items),
            Err(e) => {
                log::error!("categories: {}", e);
                set_categories_error.set(Some(e));
            }
        }
        set_categories_loading.set(false);
    });

    let slider_policy = config.placement.clone();
    let slider_banners = Signal::derive(move || {
        banners.with(|all| slider_policy.select_banners(all, BannerType::Slider, viewport.get()))
    });

    let policy = config.placement;
    let sections = move || {
        let locale = store.locale();
        let plan = categories
            .with(|cats| banners.with(|all| policy.build_home_plan(cats, all, locale.is_arabic())));

        let notice = categories_notice(
            &plan,
            categories_loading.get(),
            categories_error.with(Option::is_some),
        )
        .map(|label| {
            let class = match label {
                Label::LoadFailed => "error-message",
                Label::Loading => "loading",
                _ => "empty-state",
            };
            view! { <p class=class>{t(label, locale)}</p> }
        });

        let row_len = policy.row_len;
        let entries = plan
            .entries
            .into_iter()
            .map(|entry| match entry {
                RenderEntry::Category(category) => {
                    view! { <CategorySection category=category locale=locale row_len=row_len /> }.into_any()
                }
                RenderEntry::BannerGroup(group) => view! { <BannerGroupView group=group /> }.into_any(),
            })
            .collect_view();

        view! {
            {notice}
            {entries}
        }
    };

    view! {
        <div class="home-page">
            <Show when=move || banners_error.with(Option::is_some)>
                <div class="error-message">{move || t(Label::BannersUnavailable, store.locale())}</div>
            </Show>
            <MainSlider banners=slider_banners />
            <MiddleBanners banners=banners />
            {sections}
        </div>
    }
}
