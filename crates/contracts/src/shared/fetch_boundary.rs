//! Typed decoding of catalog responses.
//!
//! Raw JSON from the backend is turned into [`Banner`], [`Category`] and
//! [`Product`] values here, before any ranking runs. The payload may be a
//! bare array or an envelope `{"data": [...]}`. Records that do not fit the
//! schema are skipped with a warning; only a payload of the wrong shape is
//! an error.

use super::error::SchemaError;
use crate::domain::a001_banner::{Banner, BannerId};
use crate::domain::a002_product::Product;
use crate::domain::a003_category::Category;
use crate::domain::common::records::decode_each;
use serde_json::Value;
use std::collections::HashSet;

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn record_list(json: &str) -> Result<Vec<Value>, SchemaError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(SchemaError::UnexpectedShape(json_kind(&other))),
            None => Err(SchemaError::UnexpectedShape("an object without \"data\"")),
        },
        other => Err(SchemaError::UnexpectedShape(json_kind(&other))),
    }
}

/// Banners keep the first record for each id; later duplicates are dropped.
pub fn decode_banners(json: &str) -> Result<Vec<Banner>, SchemaError> {
    let banners: Vec<Banner> = decode_each(record_list(json)?, "banner");
    let mut seen: HashSet<BannerId> = HashSet::with_capacity(banners.len());
    Ok(banners
        .into_iter()
        .filter(|banner| {
            let fresh = seen.insert(banner.id);
            if !fresh {
                log::warn!("duplicate banner id {} dropped", banner.id.value());
            }
            fresh
        })
        .collect())
}

pub fn decode_categories(json: &str) -> Result<Vec<Category>, SchemaError> {
    Ok(decode_each(record_list(json)?, "category"))
}

pub fn decode_products(json: &str) -> Result<Vec<Product>, SchemaError> {
    Ok(decode_each(record_list(json)?, "product"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::BannerType;

    #[test]
    fn test_bare_array_and_envelope() {
        let bare = r#"[{"id": 1, "type": "slider", "imageUrl": "a"}]"#;
        let wrapped = r#"{"data": [{"id": 1, "type": "slider", "imageUrl": "a"}], "total": 1}"#;
        assert_eq!(decode_banners(bare).unwrap(), decode_banners(wrapped).unwrap());
        assert_eq!(decode_banners(bare).unwrap()[0].banner_type, BannerType::Slider);
    }

    #[test]
    fn test_empty_payloads() {
        assert!(decode_banners("[]").unwrap().is_empty());
        assert!(decode_categories(r#"{"data": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shapes_are_errors() {
        assert!(matches!(decode_products("{"), Err(SchemaError::Json(_))));
        assert!(matches!(
            decode_products(r#"{"items": []}"#),
            Err(SchemaError::UnexpectedShape(_))
        ));
        assert!(matches!(
            decode_products(r#"{"data": {"a": 1}}"#),
            Err(SchemaError::UnexpectedShape("an object"))
        ));
        assert!(matches!(decode_products("42"), Err(SchemaError::UnexpectedShape("a number"))));
    }

    #[test]
    fn test_bad_records_skipped() {
        let json = r#"[
            {"id": 1, "type": "fixed", "imageUrl": "a", "rank": "oops"},
            {"id": 2, "type": "popup", "imageUrl": "b"},
            {"type": "fixed", "imageUrl": "c"},
            {"id": 4, "type": "middle", "imageUrl": "d", "rank": 1}
        ]"#;
        let banners = decode_banners(json).unwrap();
        let ids: Vec<i64> = banners.iter().map(|b| b.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(banners[0].rank, None);
    }

    #[test]
    fn test_duplicate_banner_ids_first_wins() {
        let json = r#"[
            {"id": 3, "type": "fixed", "imageUrl": "first"},
            {"id": 3, "type": "slider", "imageUrl": "second"},
            {"id": 5, "type": "fixed", "imageUrl": "other"}
        ]"#;
        let banners = decode_banners(json).unwrap();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].image_url, "first");
    }

    #[test]
    fn test_categories_with_products() {
        let json = r#"{"data": [{
            "id": 12,
            "rank": 2,
            "nameEn": "Baby care",
            "nameAr": "العناية بالطفل",
            "products": [
                {"skuId": 1, "itemRank": 2, "isActive": true, "isDeleted": false, "priceAfter": 10},
                {"skuId": 2, "itemRank": null, "isActive": true, "isDeleted": false, "priceAfter": 12.5}
            ]
        }]}"#;
        let categories = decode_categories(json).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].products.len(), 2);
        assert_eq!(categories[0].products[1].price_after, 12.5);
    }
}
