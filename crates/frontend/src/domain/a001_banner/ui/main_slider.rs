use super::banner_image::BannerImage;
use contracts::domain::a001_banner::Banner;
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;
use std::time::Duration;

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Top carousel. `banners` must already be selected and ranked.
#[component]
pub fn MainSlider(#[prop(into)] banners: Signal<Vec<Banner>>) -> impl IntoView {
    let (active, set_active) = signal(0usize);

    match set_interval_with_handle(
        move || {
            let count = banners.with_untracked(Vec::len);
            if count > 1 {
                set_active.update(|i| *i = (*i + 1) % count);
            }
        },
        SLIDE_INTERVAL,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("slider autoplay disabled: {:?}", e),
    }

    // The list can shrink after a refetch
    let current = move || {
        banners.with(|list| {
            let index = active.get().min(list.len().saturating_sub(1));
            list.get(index).cloned()
        })
    };

    view! {
        <Show when=move || banners.with(|list| !list.is_empty())>
            <section class="main-slider">
                {move || current().map(|banner| view! { <BannerImage banner=banner /> })}
                <div class="main-slider__dots">
                    {move || {
                        (0..banners.with(Vec::len))
                            .map(|i| {
                                view! {
                                    <button
                                        class="main-slider__dot"
                                        class:active=move || active.get() == i
                                        on:click=move |_| set_active.set(i)
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
