use serde::{Deserialize, Serialize};

/// Where a banner is placed on the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    /// Top carousel
    Slider,
    /// Strip between the slider and the category sections
    Middle,
    /// Grouped between and after category sections
    Fixed,
}

impl BannerType {
    /// Code used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerType::Slider => "slider",
            BannerType::Middle => "middle",
            BannerType::Fixed => "fixed",
        }
    }
}
