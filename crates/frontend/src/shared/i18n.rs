//! UI labels in both storefront languages.

use contracts::enums::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Home,
    Loading,
    AddToCart,
    OutOfStock,
    Wishlist,
    Cart,
    ViewAll,
    NoProducts,
    NothingToShow,
    LoadFailed,
    BannersUnavailable,
    NotFound,
    SwitchLanguage,
}

impl Label {
    pub fn all() -> &'static [Label] {
        &[
            Label::Home,
            Label::Loading,
            Label::AddToCart,
            Label::OutOfStock,
            Label::Wishlist,
            Label::Cart,
            Label::ViewAll,
            Label::NoProducts,
            Label::NothingToShow,
            Label::LoadFailed,
            Label::BannersUnavailable,
            Label::NotFound,
            Label::SwitchLanguage,
        ]
    }

    fn texts(&self) -> (&'static str, &'static str) {
        match self {
            Label::Home => ("Home", "الرئيسية"),
            Label::Loading => ("Loading…", "جارٍ التحميل…"),
            Label::AddToCart => ("Add to cart", "أضف إلى السلة"),
            Label::OutOfStock => ("Out of stock", "غير متوفر"),
            Label::Wishlist => ("Wishlist", "المفضلة"),
            Label::Cart => ("Cart", "السلة"),
            Label::ViewAll => ("View all", "عرض الكل"),
            Label::NoProducts => ("No products available", "لا توجد منتجات متاحة"),
            Label::NothingToShow => ("Nothing to show yet", "لا يوجد محتوى حالياً"),
            Label::LoadFailed => ("Could not load the catalog", "تعذر تحميل الكتالوج"),
            Label::BannersUnavailable => ("Offers are unavailable right now", "العروض غير متاحة حالياً"),
            Label::NotFound => ("Page not found", "الصفحة غير موجودة"),
            // Shows the language the button switches to
            Label::SwitchLanguage => ("العربية", "English"),
        }
    }
}

pub fn t(label: Label, locale: Locale) -> &'static str {
    let (en, ar) = label.texts();
    match locale {
        Locale::En => en,
        Locale::Ar => ar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_translated() {
        for label in Label::all() {
            assert!(!t(*label, Locale::En).is_empty(), "{:?}", label);
            assert!(!t(*label, Locale::Ar).is_empty(), "{:?}", label);
            assert_ne!(t(*label, Locale::En), t(*label, Locale::Ar), "{:?}", label);
        }
    }
}
