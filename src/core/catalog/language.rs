use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::core::catalog::CatalogError;

/// The supported-language registry. Story narratives are only ever tagged
/// with these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
    Es,
    Pt,
}

/// Registry in display order.
pub const SUPPORTED_LANGUAGES: [Language; 4] =
    [Language::En, Language::Bn, Language::Es, Language::Pt];

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// Name of the language in that language.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Bn => "বাংলা",
            Language::Es => "Español",
            Language::Pt => "Português",
        }
    }

    /// Exact registry code, as stored in a story's tag set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .into_iter()
            .find(|language| language.code() == tag)
    }

    /// Looks up a user-typed code, tolerating case and region suffixes
    /// (`pt-BR` is `pt`).
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or("");
        SUPPORTED_LANGUAGES
            .into_iter()
            .find(|language| language.code() == primary)
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CatalogError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}
