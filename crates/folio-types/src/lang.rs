//! Languages, themes, and per-locale text pairs.

use serde::{Deserialize, Serialize};

/// A supported interface language.
///
/// English is the default and the fallback locale: every lookup that fails
/// in another language retries here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    De,
}

impl Lang {
    /// All supported languages, default first.
    pub const ALL: &[Lang] = &[Lang::En, Lang::De];

    /// The two-letter locale code ("en", "de").
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// Parse a locale code, case-insensitively. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            _ => None,
        }
    }

    /// The other language (the toggle target).
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::De,
            Lang::De => Lang::En,
        }
    }
}

/// Visual theme. Only presentation cares about this; it is carried here
/// because it is one of the two persisted preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// A string with an English original and an optional German translation.
///
/// Matches the `{"en": "...", "de": "..."}` shape used throughout the
/// content documents. German is optional; `get` falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
}

impl LocalizedText {
    /// Text in the requested language, falling back to English.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::De => self.de.as_deref().unwrap_or(&self.en),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(en: &str) -> Self {
        Self {
            en: en.to_string(),
            de: None,
        }
    }
}
