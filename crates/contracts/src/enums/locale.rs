use serde::{Deserialize, Serialize};

/// Storefront display language.
///
/// Arabic is laid out right-to-left. Ranking never depends on the locale;
/// only the visual order of already-ranked rows does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn is_arabic(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }

    /// Value for the HTML `lang` attribute and for storage.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    /// Pick the text for this locale, falling back to the other language
    /// when the preferred one is blank.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        let (preferred, other) = match self {
            Locale::Ar => (ar, en),
            Locale::En => (en, ar),
        };
        if preferred.trim().is_empty() {
            other
        } else {
            preferred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_codes() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::from_code("AR"), Locale::Ar);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Ar);
        assert_eq!(Locale::Ar.toggled().toggled(), Locale::Ar);
    }

    #[test]
    fn test_pick_falls_back_when_blank() {
        assert_eq!(Locale::Ar.pick("Vitamin C", "فيتامين سي"), "فيتامين سي");
        assert_eq!(Locale::En.pick("Vitamin C", "فيتامين سي"), "Vitamin C");
        assert_eq!(Locale::Ar.pick("Vitamin C", "  "), "Vitamin C");
        assert_eq!(Locale::En.pick("", "فيتامين سي"), "فيتامين سي");
    }
}
