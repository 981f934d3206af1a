use serde::{Deserialize, Serialize};

/// Ranking and placement settings for the storefront.
///
/// Every field has a default, so a partial config section (or none at all)
/// deserializes into a working policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPolicy {
    /// Fallback for a missing banner `rank` or product `itemRank`.
    pub missing_rank: i64,
    /// Fallback for a missing category `rank`.
    pub missing_category_rank: i64,
    /// Viewports strictly narrower than this are treated as mobile.
    pub narrow_viewport_px: u32,
    /// How many middle banners a narrow viewport shows.
    pub middle_narrow_limit: usize,
    /// Banners per interleaved group.
    pub group_size: usize,
    /// A banner group follows every `group_every`-th category.
    pub group_every: usize,
    /// Reverse middle-banner rows for every locale, not only Arabic.
    pub legacy_middle_reversal: bool,
    /// Items per visual row when a view lays ranked items out in rows.
    pub row_len: usize,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            missing_rank: 999,
            missing_category_rank: 0,
            narrow_viewport_px: 768,
            middle_narrow_limit: 3,
            group_size: 3,
            group_every: 2,
            legacy_middle_reversal: false,
            row_len: 3,
        }
    }
}

impl PlacementPolicy {
    /// Zero sizes would stall chunking; clamp them to 1.
    pub fn normalized(mut self) -> Self {
        self.group_size = self.group_size.max(1);
        self.group_every = self.group_every.max(1);
        self.row_len = self.row_len.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let policy: PlacementPolicy =
            serde_json::from_str(r#"{"narrow_viewport_px": 600}"#).unwrap();
        assert_eq!(policy.narrow_viewport_px, 600);
        assert_eq!(policy.missing_rank, 999);
        assert_eq!(policy.group_size, 3);
        assert!(!policy.legacy_middle_reversal);
    }

    #[test]
    fn test_normalized_clamps_zero_sizes() {
        let policy = PlacementPolicy {
            group_size: 0,
            group_every: 0,
            row_len: 0,
            ..PlacementPolicy::default()
        }
        .normalized();
        assert_eq!((policy.group_size, policy.group_every, policy.row_len), (1, 1, 1));
    }
}
