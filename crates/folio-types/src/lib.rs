//! Foundation types for termfolio.
//!
//! This crate contains the types shared by all termfolio crates: the error
//! enum, language and theme enums, localized text pairs, and the persisted
//! user preferences.

pub mod error;
pub mod lang;
pub mod prefs;

pub use error::{FolioError, Result};
pub use lang::{Lang, LocalizedText, Theme};
pub use prefs::Prefs;
