// SPDX-License-Identifier: MPL-2.0
//! Interface languages.

use super::choice::Choice;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A language the interface can be displayed in.
///
/// Codes are matched case-insensitively and region or script subtags are
/// ignored, so `"de"`, `"DE"`, `"de-AT"` and `"de_DE"` all name German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Polish,
    Czech,
    Swedish,
    Russian,
    Ukrainian,
    Turkish,
    Arabic,
    Hindi,
    Chinese,
    Japanese,
    Korean,
    Indonesian,
    Vietnamese,
}

impl Language {
    /// Two-letter ISO 639-1 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Polish => "pl",
            Language::Czech => "cs",
            Language::Swedish => "sv",
            Language::Russian => "ru",
            Language::Ukrainian => "uk",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
            Language::Hindi => "hi",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Indonesian => "id",
            Language::Vietnamese => "vi",
        }
    }

    /// Name of the language written in that language, for the language menu.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::French => "Français",
            Language::Spanish => "Español",
            Language::Italian => "Italiano",
            Language::Portuguese => "Português",
            Language::Dutch => "Nederlands",
            Language::Polish => "Polski",
            Language::Czech => "Čeština",
            Language::Swedish => "Svenska",
            Language::Russian => "Русский",
            Language::Ukrainian => "Українська",
            Language::Turkish => "Türkçe",
            Language::Arabic => "العربية",
            Language::Hindi => "हिन्दी",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
            Language::Korean => "한국어",
            Language::Indonesian => "Bahasa Indonesia",
            Language::Vietnamese => "Tiếng Việt",
        }
    }

    /// Parses a language code or full locale tag.
    ///
    /// Returns `None` for empty, malformed, or unsupported codes.
    #[must_use]
    pub fn from_code(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Some(language) = Self::ALL
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(text))
        {
            return Some(language);
        }
        // Locale tags such as "pt-BR" or "zh_Hans_CN".
        let tag = text.parse::<LanguageIdentifier>().ok()?;
        let primary = tag.language.as_str();
        Self::ALL.iter().copied().find(|l| l.code() == primary)
    }

    /// Parses a requested code, treating unknown or absent codes as the default.
    #[must_use]
    pub fn resolve_requested(text: Option<&str>) -> Self {
        text.and_then(Self::from_code)
            .unwrap_or_else(Self::default_member)
    }
}

impl Choice for Language {
    const SET: &'static str = "language";
    const ALL: &'static [Self] = &[
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Polish,
        Language::Czech,
        Language::Swedish,
        Language::Russian,
        Language::Ukrainian,
        Language::Turkish,
        Language::Arabic,
        Language::Hindi,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Indonesian,
        Language::Vietnamese,
    ];

    fn key(self) -> &'static str {
        self.code()
    }

    fn is_default(self) -> bool {
        self == Language::English
    }

    fn from_key(text: &str) -> Option<Self> {
        Self::from_code(text)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::default_member()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
