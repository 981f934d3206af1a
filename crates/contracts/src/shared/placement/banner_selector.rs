//! Banner selection and ordering per placement.

use super::{PlacementPolicy, Viewport};
use crate::domain::a001_banner::Banner;
use crate::domain::common::effective_rank;
use crate::enums::BannerType;

impl PlacementPolicy {
    /// Banners of one placement, ascending by rank (missing last), ties by id.
    ///
    /// Middle banners are cut to `middle_narrow_limit` on narrow viewports.
    pub fn select_banners(
        &self,
        banners: &[Banner],
        placement: BannerType,
        viewport: Viewport,
    ) -> Vec<Banner> {
        let mut selected: Vec<Banner> = banners
            .iter()
            .filter(|b| b.banner_type == placement)
            .cloned()
            .collect();
        self.sort_banners(&mut selected);

        if placement == BannerType::Middle && viewport.is_narrow(self.narrow_viewport_px) {
            selected.truncate(self.middle_narrow_limit);
        }
        selected
    }

    pub(crate) fn sort_banners(&self, banners: &mut [Banner]) {
        banners.sort_by_key(|b| (effective_rank(b.rank, self.missing_rank), b.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(id: i64, banner_type: BannerType, rank: Option<i64>) -> Banner {
        Banner::new(id, banner_type, rank, format!("/img/{}.webp", id))
    }

    fn ids(banners: &[Banner]) -> Vec<i64> {
        banners.iter().map(|b| b.id.value()).collect()
    }

    const DESKTOP: Viewport = Viewport { width_px: 1280 };
    const MOBILE: Viewport = Viewport { width_px: 500 };

    #[test]
    fn test_filters_by_placement() {
        let all = vec![
            banner(1, BannerType::Slider, Some(1)),
            banner(2, BannerType::Fixed, Some(1)),
            banner(3, BannerType::Slider, Some(2)),
            banner(4, BannerType::Middle, Some(1)),
        ];
        let policy = PlacementPolicy::default();
        assert_eq!(ids(&policy.select_banners(&all, BannerType::Slider, DESKTOP)), vec![1, 3]);
        assert_eq!(ids(&policy.select_banners(&all, BannerType::Fixed, DESKTOP)), vec![2]);
        assert_eq!(ids(&policy.select_banners(&all, BannerType::Middle, DESKTOP)), vec![4]);
    }

    #[test]
    fn test_rank_order_missing_last_ties_by_id() {
        let all = vec![
            banner(10, BannerType::Slider, None),
            banner(9, BannerType::Slider, Some(2)),
            banner(4, BannerType::Slider, Some(2)),
            banner(7, BannerType::Slider, Some(1)),
            banner(2, BannerType::Slider, None),
        ];
        let selected = PlacementPolicy::default().select_banners(&all, BannerType::Slider, DESKTOP);
        assert_eq!(ids(&selected), vec![7, 4, 9, 2, 10]);
    }

    #[test]
    fn test_missing_rank_equals_fallback_value() {
        // A missing rank behaves exactly like 999: tie with an explicit 999 breaks by id.
        let all = vec![
            banner(5, BannerType::Fixed, Some(999)),
            banner(3, BannerType::Fixed, None),
            banner(8, BannerType::Fixed, Some(1000)),
        ];
        let selected = PlacementPolicy::default().select_banners(&all, BannerType::Fixed, DESKTOP);
        assert_eq!(ids(&selected), vec![3, 5, 8]);
    }

    #[test]
    fn test_middle_on_mobile_keeps_three_in_rank_order() {
        let all = vec![
            banner(1, BannerType::Middle, Some(3)),
            banner(2, BannerType::Middle, Some(1)),
            banner(3, BannerType::Middle, Some(2)),
        ];
        let selected = PlacementPolicy::default().select_banners(&all, BannerType::Middle, MOBILE);
        let ranks: Vec<Option<i64>> = selected.iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_middle_truncated_only_on_narrow_viewport() {
        let all: Vec<Banner> = (1..=5)
            .map(|i| banner(i, BannerType::Middle, Some(6 - i)))
            .collect();
        let policy = PlacementPolicy::default();
        assert_eq!(ids(&policy.select_banners(&all, BannerType::Middle, MOBILE)), vec![5, 4, 3]);
        assert_eq!(policy.select_banners(&all, BannerType::Middle, DESKTOP).len(), 5);
        assert_eq!(
            policy.select_banners(&all, BannerType::Middle, Viewport::new(768)).len(),
            5
        );
    }

    #[test]
    fn test_other_placements_never_truncated() {
        let all: Vec<Banner> = (1..=6).map(|i| banner(i, BannerType::Slider, Some(i))).collect();
        let selected = PlacementPolicy::default().select_banners(&all, BannerType::Slider, MOBILE);
        assert_eq!(selected.len(), 6);
    }

    #[test]
    fn test_empty_input() {
        let selected = PlacementPolicy::default().select_banners(&[], BannerType::Middle, MOBILE);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_output_sorted_for_varied_inputs() {
        let policy = PlacementPolicy::default();
        for seed in 0..20i64 {
            let all: Vec<Banner> = (0..12)
                .map(|i| {
                    let rank = if (i + seed) % 4 == 0 { None } else { Some((i * 7 + seed) % 5) };
                    banner((i * 13 + seed) % 17 + i * 100, BannerType::Fixed, rank)
                })
                .collect();
            let selected = policy.select_banners(&all, BannerType::Fixed, DESKTOP);
            assert_eq!(selected.len(), all.len());
            for pair in selected.windows(2) {
                let a = (pair[0].rank.unwrap_or(999), pair[0].id);
                let b = (pair[1].rank.unwrap_or(999), pair[1].id);
                assert!(a <= b, "seed {}: {:?} before {:?}", seed, a, b);
            }
        }
    }
}
