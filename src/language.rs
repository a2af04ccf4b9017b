//! The three languages the directory is published in.

use serde::{Deserialize, Serialize};

/// Display language for the directory. Selecting fields through this enum
/// (instead of building `name_<code>` keys at runtime) makes a missing
/// translation unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Oromo,
    Amharic,
    #[default]
    English,
}

impl Language {
    /// All languages, in the order the language picker shows them.
    pub const ALL: [Language; 3] = [Language::Oromo, Language::Amharic, Language::English];

    /// Two-letter code used in callback payloads and in the storage file's
    /// field suffixes.
    pub fn code(self) -> &'static str {
        match self {
            Language::Oromo => "or",
            Language::Amharic => "am",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "or" => Some(Language::Oromo),
            "am" => Some(Language::Amharic),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Label shown on the language picker button.
    pub fn button_label(self) -> &'static str {
        match self {
            Language::Oromo => "🇪🇹 Afaan Oromoo",
            Language::Amharic => "🇪🇹 አማርኛ",
            Language::English => "🇬🇧 English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
