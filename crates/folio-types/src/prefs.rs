//! Persisted user preferences.
//!
//! Exactly two flags survive a session: the interface language and the
//! visual theme. They are read once at startup and written on toggle.
//! A missing or corrupt file is never an error; defaults apply.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lang::{Lang, Theme};

/// The persisted preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub lang: Lang,
    pub theme: Theme,
}

impl Prefs {
    /// Load preferences from a TOML file, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load(path: &Path) -> Prefs {
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!("ignoring corrupt prefs file {}: {e}", path.display());
                    Prefs::default()
                },
            },
            Err(_) => Prefs::default(),
        }
    }

    /// Write preferences to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }
}
