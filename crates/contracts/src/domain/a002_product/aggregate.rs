use crate::domain::common::{aggregate_id::deserialize_text_id, effective_rank, rank, AggregateId};
use crate::enums::Locale;
use serde::{Deserialize, Deserializer, Serialize};

/// Images without a rank go after ranked ones.
const MISSING_IMAGE_RANK: i64 = 999;

// ============================================================================
// ID Type
// ============================================================================

/// Stock keeping unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SkuId(pub String);

impl SkuId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl<'de> Deserialize<'de> for SkuId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_text_id(deserializer).map(Self)
    }
}

impl AggregateId for SkuId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("SKU must not be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default, deserialize_with = "rank::lenient")]
    pub rank: Option<i64>,
}

/// Pharmacy product as the catalog returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub sku_id: SkuId,

    #[serde(default, deserialize_with = "rank::lenient")]
    pub item_rank: Option<i64>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_deleted: bool,

    #[serde(default)]
    pub price_before: Option<f64>,

    pub price_after: f64,

    #[serde(default)]
    pub available_stock: i64,

    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub name_ar: String,

    #[serde(default)]
    pub card_description_en: String,

    #[serde(default)]
    pub card_description_ar: String,

    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Active and not soft-deleted.
    pub fn is_displayable(&self) -> bool {
        self.is_active && !self.is_deleted
    }

    pub fn name(&self, locale: Locale) -> &str {
        locale.pick(&self.name_en, &self.name_ar)
    }

    pub fn card_description(&self, locale: Locale) -> &str {
        locale.pick(&self.card_description_en, &self.card_description_ar)
    }

    /// Images ordered by rank; unranked images keep their list order at the end.
    pub fn ordered_images(&self) -> Vec<&ProductImage> {
        let mut images: Vec<&ProductImage> = self.images.iter().collect();
        images.sort_by_key(|img| effective_rank(img.rank, MISSING_IMAGE_RANK));
        images
    }

    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.ordered_images().into_iter().next()
    }

    /// Discount in percent when the old price is above the current one
    pub fn discount_percent(&self) -> Option<u8> {
        let before = self.price_before?;
        if self.price_after <= 0.0 || before <= self.price_after {
            return None;
        }
        let percent = ((before - self.price_after) / before * 100.0).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }

    pub fn in_stock(&self) -> bool {
        self.available_stock > 0
    }
}
