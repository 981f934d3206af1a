use crate::domain::common::{rank, AggregateId};
use crate::enums::BannerType;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Banner identifier, unique within one response
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(pub i64);

impl BannerId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for BannerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(BannerId)
            .map_err(|e| format!("Invalid banner id: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Storefront promo banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,

    #[serde(rename = "type")]
    pub banner_type: BannerType,

    /// Lower value = more prominent. Missing sorts last.
    #[serde(default, deserialize_with = "rank::lenient")]
    pub rank: Option<i64>,

    pub image_url: String,

    #[serde(default)]
    pub link_url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl Banner {
    pub fn new(id: i64, banner_type: BannerType, rank: Option<i64>, image_url: impl Into<String>) -> Self {
        Self {
            id: BannerId(id),
            banner_type,
            rank,
            image_url: image_url.into(),
            link_url: None,
            title: None,
        }
    }

    /// Link target, if present and not blank
    pub fn href(&self) -> Option<&str> {
        self.link_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Alt text for the image
    pub fn alt_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
