use crate::system::storage;
use contracts::enums::Locale;
use leptos::prelude::*;
use std::collections::HashSet;
use web_sys::window;

/// Application-wide state shared by the storefront views.
///
/// Provided once by `App` and read through [`use_app_store`]. Every field is
/// a signal, so views subscribe simply by reading it. Writes go through the
/// methods below, which also persist what must survive a reload.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub locale: RwSignal<Locale>,
    pub access_token: RwSignal<Option<String>>,
    pub cart_count: RwSignal<u32>,
    /// SKU ids the shopper marked in this session.
    pub wishlist: RwSignal<HashSet<String>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            locale: RwSignal::new(Locale::default()),
            access_token: RwSignal::new(None),
            cart_count: RwSignal::new(0),
            wishlist: RwSignal::new(HashSet::new()),
        }
    }

    /// Store initialised from localStorage.
    pub fn restore() -> Self {
        let store = Self::new();
        let locale = storage::get_locale()
            .map(|code| Locale::from_code(&code))
            .unwrap_or_default();
        store.locale.set(locale);
        store.access_token.set(storage::get_access_token());
        store.cart_count.set(storage::get_cart_count());
        apply_document_locale(locale);
        log::info!(
            "store restored: locale={}, signed_in={}",
            locale.code(),
            store.access_token.with_untracked(Option::is_some)
        );
        store
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn is_arabic(&self) -> bool {
        self.locale.with(Locale::is_arabic)
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        storage::save_locale(locale.code());
        apply_document_locale(locale);
    }

    pub fn toggle_locale(&self) {
        let next = self.locale.get_untracked().toggled();
        log::debug!("locale -> {}", next.code());
        self.set_locale(next);
    }

    pub fn set_access_token(&self, token: Option<String>) {
        match &token {
            Some(t) => storage::save_access_token(t),
            None => storage::clear_access_token(),
        }
        self.access_token.set(token);
    }

    /// Drop the token and every per-shopper counter.
    pub fn clear_session(&self) {
        self.set_access_token(None);
        self.set_cart_count(0);
        self.wishlist.set(HashSet::new());
    }

    pub fn set_cart_count(&self, count: u32) {
        self.cart_count.set(count);
        storage::save_cart_count(count);
    }

    pub fn add_to_cart(&self, quantity: u32) {
        let next = self.cart_count.get_untracked().saturating_add(quantity);
        self.set_cart_count(next);
    }

    /// Returns whether the SKU is in the wishlist afterwards.
    pub fn toggle_wishlist(&self, sku: &str) -> bool {
        let mut added = false;
        self.wishlist.update(|items| {
            added = items.insert(sku.to_string());
            if !added {
                items.remove(sku);
            }
        });
        added
    }

    pub fn is_wishlisted(&self, sku: &str) -> bool {
        self.wishlist.with(|items| items.contains(sku))
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.with(HashSet::len)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Set `lang` and `dir` on the root element.
fn apply_document_locale(locale: Locale) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(el) => el,
        None => return,
    };
    let _ = root.set_attribute("lang", locale.code());
    let _ = root.set_attribute("dir", locale.dir());
}

/// Hook to access the app store
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not found in context")
}
