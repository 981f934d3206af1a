//! Ranking and placement policy for storefront content.
//!
//! Every view that shows banners or products in some order goes through
//! this module. All functions are pure: they take already-fetched data and
//! never fail on empty input.
//!
//! The free functions use [`PlacementPolicy::default`]; views that carry a
//! configured policy call the methods directly.

pub mod banner_selector;
pub mod interleaver;
pub mod locale_order;
pub mod policy;
pub mod product_ranking;
pub mod render_plan;
pub mod viewport;

pub use locale_order::{apply_locale_order, rows_in_reading_order};
pub use policy::PlacementPolicy;
pub use render_plan::{BannerGroup, GroupLayout, RenderEntry, RenderPlan};
pub use viewport::Viewport;

use crate::domain::a001_banner::Banner;
use crate::domain::a002_product::Product;
use crate::domain::a003_category::Category;
use crate::enums::BannerType;

pub fn select_banners(banners: &[Banner], placement: BannerType, viewport: Viewport) -> Vec<Banner> {
    PlacementPolicy::default().select_banners(banners, placement, viewport)
}

pub fn rank_products(products: &[Product]) -> Vec<Product> {
    PlacementPolicy::default().rank_products(products)
}

pub fn interleave(categories: &[Category], fixed_banners: &[Banner], is_arabic: bool) -> RenderPlan {
    PlacementPolicy::default().interleave(categories, fixed_banners, is_arabic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_use_default_policy() {
        let banners = vec![
            Banner::new(1, BannerType::Middle, Some(2), "a"),
            Banner::new(2, BannerType::Middle, Some(1), "b"),
            Banner::new(3, BannerType::Middle, None, "c"),
            Banner::new(4, BannerType::Middle, Some(0), "d"),
        ];
        let mobile = select_banners(&banners, BannerType::Middle, Viewport::new(375));
        let ids: Vec<i64> = mobile.iter().map(|b| b.id.value()).collect();
        assert_eq!(ids, vec![4, 2, 1]);

        assert!(rank_products(&[]).is_empty());
        assert!(interleave(&[], &[], false).is_empty());
    }
}
