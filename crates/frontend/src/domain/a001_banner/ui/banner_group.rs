use super::banner_image::BannerImage;
use contracts::shared::placement::{BannerGroup, GroupLayout};
use leptos::prelude::*;

fn layout_class(layout: GroupLayout) -> &'static str {
    match layout {
        GroupLayout::Inline => "banner-group banner-group--inline",
        GroupLayout::Slider => "banner-group banner-group--slider",
        GroupLayout::Grid => "banner-group banner-group--grid",
    }
}

/// One banner group of the render plan, already in visual order.
#[component]
pub fn BannerGroupView(group: BannerGroup) -> impl IntoView {
    view! {
        <section class=layout_class(group.layout) dir="ltr">
            {group
                .banners
                .into_iter()
                .map(|banner| view! { <BannerImage banner=banner /> })
                .collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_classes_distinct() {
        let classes = [
            layout_class(GroupLayout::Inline),
            layout_class(GroupLayout::Slider),
            layout_class(GroupLayout::Grid),
        ];
        assert!(classes.iter().all(|c| c.starts_with("banner-group ")));
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }
}
