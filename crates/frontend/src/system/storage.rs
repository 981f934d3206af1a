//! Persistence of session state in localStorage.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "storefront_access_token";
const LOCALE_KEY: &str = "storefront_locale";
const CART_COUNT_KEY: &str = "storefront_cart_count";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {}", key);
        }
    }
}

fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    set_item(ACCESS_TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn clear_access_token() {
    remove_item(ACCESS_TOKEN_KEY);
}

pub fn save_locale(code: &str) {
    set_item(LOCALE_KEY, code);
}

pub fn get_locale() -> Option<String> {
    get_item(LOCALE_KEY)
}

pub fn save_cart_count(count: u32) {
    set_item(CART_COUNT_KEY, &count.to_string());
}

/// Unreadable values count as an empty cart.
pub fn get_cart_count() -> u32 {
    get_item(CART_COUNT_KEY)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
