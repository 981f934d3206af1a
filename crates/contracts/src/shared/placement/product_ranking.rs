//! Product and category ranking.

use super::PlacementPolicy;
use crate::domain::a002_product::Product;
use crate::domain::a003_category::Category;
use crate::domain::common::effective_rank;

impl PlacementPolicy {
    /// Displayable products only, ascending by `itemRank` (missing last).
    ///
    /// The sort is stable: equal ranks keep their original order.
    pub fn rank_products(&self, products: &[Product]) -> Vec<Product> {
        let mut ranked: Vec<Product> = products
            .iter()
            .filter(|p| p.is_displayable())
            .cloned()
            .collect();
        ranked.sort_by_key(|p| effective_rank(p.item_rank, self.missing_rank));
        ranked
    }

    /// Stable ascending order by category rank.
    pub fn rank_categories(&self, categories: &[Category]) -> Vec<Category> {
        let mut ranked = categories.to_vec();
        ranked.sort_by_key(|c| effective_rank(c.rank, self.missing_category_rank));
        ranked
    }

    /// Categories worth rendering, each with its products already ranked.
    ///
    /// Categories without displayable products are dropped entirely rather
    /// than shown empty. Category order is left as given.
    pub fn visible_categories(&self, categories: &[Category]) -> Vec<Category> {
        categories
            .iter()
            .filter(|category| {
                let visible = category.is_visible();
                if !visible {
                    log::debug!("category {} hidden: nothing displayable", category.id.0);
                }
                visible
            })
            .map(|category| Category {
                products: self.rank_products(&category.products),
                ..category.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::SkuId;
    use crate::domain::a003_category::CategoryId;

    fn product(sku: &str, item_rank: Option<i64>, is_active: bool, is_deleted: bool) -> Product {
        Product {
            sku_id: SkuId::new(sku),
            item_rank,
            is_active,
            is_deleted,
            price_before: None,
            price_after: 10.0,
            available_stock: 1,
            name_en: sku.to_string(),
            name_ar: String::new(),
            card_description_en: String::new(),
            card_description_ar: String::new(),
            images: Vec::new(),
        }
    }

    fn category(id: &str, rank: Option<i64>, products: Vec<Product>) -> Category {
        Category {
            id: CategoryId::new(id),
            rank,
            name_en: id.to_string(),
            name_ar: String::new(),
            products,
        }
    }

    fn skus(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.sku_id.0.as_str()).collect()
    }

    #[test]
    fn test_inactive_excluded_and_missing_rank_last() {
        let products = vec![
            product("rank2", Some(2), true, false),
            product("rank1", Some(1), false, false),
            product("rankNull", None, true, false),
        ];
        let ranked = PlacementPolicy::default().rank_products(&products);
        assert_eq!(skus(&ranked), vec!["rank2", "rankNull"]);
    }

    #[test]
    fn test_deleted_excluded() {
        let products = vec![
            product("gone", Some(1), true, true),
            product("kept", Some(5), true, false),
        ];
        assert_eq!(skus(&PlacementPolicy::default().rank_products(&products)), vec!["kept"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let products = vec![
            product("c", Some(1), true, false),
            product("a", Some(1), true, false),
            product("x", None, true, false),
            product("b", Some(1), true, false),
            product("y", None, true, false),
        ];
        let ranked = PlacementPolicy::default().rank_products(&products);
        assert_eq!(skus(&ranked), vec!["c", "a", "b", "x", "y"]);
    }

    #[test]
    fn test_only_displayable_and_sorted_for_varied_inputs() {
        let policy = PlacementPolicy::default();
        for seed in 0..16i64 {
            let products: Vec<Product> = (0..10)
                .map(|i| {
                    let rank = if (i + seed) % 3 == 0 { None } else { Some((i * 5 + seed) % 7) };
                    product(&format!("p{}", i), rank, (i + seed) % 4 != 1, (i * seed) % 5 == 2)
                })
                .collect();
            let ranked = policy.rank_products(&products);
            assert!(ranked.iter().all(|p| p.is_active && !p.is_deleted));
            assert_eq!(ranked.len(), products.iter().filter(|p| p.is_displayable()).count());
            for pair in ranked.windows(2) {
                assert!(pair[0].item_rank.unwrap_or(999) <= pair[1].item_rank.unwrap_or(999));
            }
        }
    }

    #[test]
    fn test_empty_products() {
        assert!(PlacementPolicy::default().rank_products(&[]).is_empty());
    }

    #[test]
    fn test_visible_categories_drop_empty_and_rank_products() {
        let categories = vec![
            category("vitamins", Some(2), vec![
                product("b", Some(2), true, false),
                product("a", Some(1), true, false),
                product("hidden", Some(0), false, false),
            ]),
            category("empty", Some(1), vec![product("gone", Some(1), true, true)]),
            category("none", Some(3), vec![]),
        ];
        let visible = PlacementPolicy::default().visible_categories(&categories);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, CategoryId::new("vitamins"));
        assert_eq!(skus(&visible[0].products), vec!["a", "b"]);
    }

    #[test]
    fn test_rank_categories_missing_rank_first() {
        let categories = vec![
            category("c3", Some(3), vec![]),
            category("none", None, vec![]),
            category("c1", Some(1), vec![]),
            category("zero", Some(0), vec![]),
        ];
        let ranked = PlacementPolicy::default().rank_categories(&categories);
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(ids, vec!["none", "zero", "c1", "c3"]);
    }
}
