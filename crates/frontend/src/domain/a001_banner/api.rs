use crate::shared::api_utils::get_text;
use contracts::domain::a001_banner::Banner;
use contracts::shared::fetch_boundary::decode_banners;

/// All banners of every placement; the views pick what they need.
pub async fn fetch_banners(api_base: &str, access_token: Option<&str>) -> Result<Vec<Banner>, String> {
    let text = get_text(&format!("{}/api/banners", api_base), access_token).await?;
    decode_banners(&text).map_err(|e| format!("Failed to parse banners: {}", e))
}
