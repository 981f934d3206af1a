use crate::shared::api_utils::get_text;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_category::{Category, CategoryId};
use contracts::domain::common::AggregateId;
use contracts::shared::fetch_boundary::{decode_categories, decode_products};

/// Categories with their products embedded
pub async fn fetch_categories(api_base: &str, access_token: Option<&str>) -> Result<Vec<Category>, String> {
    let text = get_text(&format!("{}/api/categories", api_base), access_token).await?;
    decode_categories(&text).map_err(|e| format!("Failed to parse categories: {}", e))
}

/// Products of one category
pub async fn fetch_category_products(
    api_base: &str,
    category_id: &CategoryId,
    access_token: Option<&str>,
) -> Result<Vec<Product>, String> {
    let url = format!("{}/api/categories/{}/products", api_base, category_id.as_string());
    let text = get_text(&url, access_token).await?;
    decode_products(&text).map_err(|e| format!("Failed to parse products: {}", e))
}
