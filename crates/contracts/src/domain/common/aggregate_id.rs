use serde::{Deserialize, Deserializer};
use std::hash::Hash;

/// Identifier types of storefront aggregates
pub trait AggregateId: Clone + PartialEq + Eq + Hash + std::fmt::Debug {
    /// Textual form, as used in URLs and store keys
    fn as_string(&self) -> String;

    /// Parse from text such as a route parameter
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Identifier as the backend sends it: some endpoints use numbers, some strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Deserialize a string-or-number identifier into its textual form.
pub(crate) fn deserialize_text_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n.to_string()),
        RawId::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(serde::de::Error::custom("identifier must not be empty"))
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_text_id")]
        id: String,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let a: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(a.id, "42");
        let b: Holder = serde_json::from_str(r#"{"id": " sku-7 "}"#).unwrap();
        assert_eq!(b.id, "sku-7");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": "  "}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id": null}"#).is_err());
    }
}
