use crate::domain::a002_product::Product;
use crate::domain::common::{aggregate_id::deserialize_text_id, rank, records, AggregateId};
use crate::enums::Locale;
use serde::{Deserialize, Deserializer, Serialize};

/// Category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_text_id(deserializer).map(Self)
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("category id must not be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

/// Catalog category with its products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    #[serde(default, deserialize_with = "rank::lenient")]
    pub rank: Option<i64>,

    #[serde(default)]
    pub name_en: String,

    #[serde(default)]
    pub name_ar: String,

    /// Products that fail to decode are dropped, not the whole category.
    #[serde(default, deserialize_with = "records::skip_invalid")]
    pub products: Vec<Product>,
}

impl Category {
    pub fn name(&self, locale: Locale) -> &str {
        locale.pick(&self.name_en, &self.name_ar)
    }

    /// A category is shown only if it has at least one displayable product.
    pub fn is_visible(&self) -> bool {
        self.products.iter().any(Product::is_displayable)
    }
}
