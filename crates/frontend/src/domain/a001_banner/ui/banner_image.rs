use contracts::domain::a001_banner::Banner;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Banner picture, wrapped in a link when the banner has one.
#[component]
pub fn BannerImage(banner: Banner) -> impl IntoView {
    let class = format!("banner banner--{}", banner.banner_type.as_str());
    let banner_id = banner.id.as_string();
    let image = view! {
        <img
            class="banner__image"
            src=banner.image_url.clone()
            alt=banner.alt_text().to_string()
            loading="lazy"
        />
    };

    match banner.href() {
        Some(href) => view! {
            <a class=class data-banner-id=banner_id href=href.to_string()>{image}</a>
        }
        .into_any(),
        None => view! { <div class=class data-banner-id=banner_id>{image}</div> }.into_any(),
    }
}
