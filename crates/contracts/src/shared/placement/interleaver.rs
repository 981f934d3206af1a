//! Fixed banner groups placed between category sections.

use super::locale_order::apply_locale_order;
use super::render_plan::{GroupLayout, RenderPlan};
use super::PlacementPolicy;
use crate::domain::a001_banner::Banner;
use crate::domain::a003_category::Category;
use crate::enums::BannerType;

/// Hands out ranked banners front to back, each banner at most once.
struct BannerCursor {
    banners: Vec<Banner>,
    position: usize,
}

impl BannerCursor {
    fn new(banners: Vec<Banner>) -> Self {
        Self { banners, position: 0 }
    }

    /// Up to `n` next banners; fewer (or none) once the list runs out.
    fn take(&mut self, n: usize) -> Vec<Banner> {
        let end = (self.position + n).min(self.banners.len());
        let taken = self.banners[self.position..end].to_vec();
        self.position = end;
        taken
    }

    fn take_rest(&mut self) -> Vec<Banner> {
        self.take(self.banners.len())
    }
}

impl PlacementPolicy {
    /// Build the render plan for a sequence of category sections.
    ///
    /// Categories are emitted in rank order. After every `group_every`-th
    /// category, except the last one, the next `group_size` fixed banners form
    /// an inline group. Leftover banners go after the last category: a slider
    /// group of `group_size` plus a grid group for the rest, or a single grid
    /// group when fewer than `group_size` remain. Each group is put in visual
    /// order for the locale independently.
    ///
    /// Only `fixed` banners are consumed; anything else in `fixed_banners` is ignored.
    pub fn interleave(
        &self,
        categories: &[Category],
        fixed_banners: &[Banner],
        is_arabic: bool,
    ) -> RenderPlan {
        let group_size = self.group_size.max(1);
        let group_every = self.group_every.max(1);

        let categories = self.rank_categories(categories);
        let mut banners: Vec<Banner> = fixed_banners
            .iter()
            .filter(|b| b.banner_type == BannerType::Fixed)
            .cloned()
            .collect();
        self.sort_banners(&mut banners);
        let mut cursor = BannerCursor::new(banners);

        let mut plan = RenderPlan::default();
        let last = categories.len().saturating_sub(1);
        for (index, category) in categories.into_iter().enumerate() {
            plan.push_category(category);
            if (index + 1) % group_every == 0 && index != last {
                let group = cursor.take(group_size);
                plan.push_group(GroupLayout::Inline, apply_locale_order(group, is_arabic));
            }
        }

        let mut rest = cursor.take_rest();
        if rest.len() >= group_size {
            let tail = rest.split_off(group_size);
            plan.push_group(GroupLayout::Slider, apply_locale_order(rest, is_arabic));
            plan.push_group(GroupLayout::Grid, apply_locale_order(tail, is_arabic));
        } else {
            plan.push_group(GroupLayout::Grid, apply_locale_order(rest, is_arabic));
        }

        log::debug!(
            "render plan: {} categories, {} banner groups",
            plan.categories().count(),
            plan.banner_groups().count()
        );
        plan
    }

    /// Home page plan straight from fetched data.
    ///
    /// Hides categories with nothing displayable, ranks their products and
    /// interleaves the fixed banners found in `banners`.
    pub fn build_home_plan(
        &self,
        categories: &[Category],
        banners: &[Banner],
        is_arabic: bool,
    ) -> RenderPlan {
        let visible = self.visible_categories(categories);
        self.interleave(&visible, banners, is_arabic)
    }
}
