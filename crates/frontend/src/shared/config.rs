//! Storefront configuration.
//!
//! A default TOML config is embedded in the bundle. A page can override any
//! part of it with an inline element:
//!
//! ```html
//! <script id="storefront-config" type="application/toml">
//! [placement]
//! narrow_viewport_px = 640
//! </script>
//! ```

use contracts::enums::Locale;
use contracts::shared::placement::PlacementPolicy;
use leptos::prelude::*;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[display]
currency_en = "EGP"
currency_ar = "ج.م"

[placement]
missing_rank = 999
missing_category_rank = 0
narrow_viewport_px = 768
middle_narrow_limit = 3
group_size = 3
group_every = 2
legacy_middle_reversal = false
row_len = 3
"#;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub placement: PlacementPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend port on the page's own host.
    pub port: u16,
    /// Absolute base URL; takes precedence over `port` when set.
    pub base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            base_url: None,
        }
    }
}

impl ApiConfig {
    /// Base URL for a page served from `protocol//hostname`.
    pub fn base_for(&self, protocol: &str, hostname: &str) -> String {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("{}//{}:{}", protocol, hostname, self.port),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_en: String,
    pub currency_ar: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_en: "EGP".to_string(),
            currency_ar: "ج.م".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn currency(&self, locale: Locale) -> &str {
        locale.pick(&self.currency_en, &self.currency_ar)
    }
}

/// Parse a TOML config; absent sections and keys keep their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(text)?;
    config.placement = config.placement.normalized();
    Ok(config)
}

fn inline_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Load configuration
///
/// Search order:
/// 1. Inline `<script id="storefront-config">` element
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(text) = inline_config_text() {
        log::info!("Loading config from #{}", CONFIG_ELEMENT_ID);
        return parse_config(&text);
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Like [`load_config`], but a broken override only costs a warning.
pub fn load_config_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Storefront config rejected, using defaults: {}", e);
            parse_config(DEFAULT_CONFIG).unwrap_or_default()
        }
    }
}

/// Hook to access the configuration provided by `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
