use crate::state::local_storage::LocalStorage;
use serde::{ Deserialize, Serialize };
use std::str::FromStr;
use strum::{ Display, EnumIter, EnumString, IntoEnumIterator };

/// Local storage key the theme is persisted under
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Get all selectable themes, in menu order
    pub fn all() -> Vec<Theme> {
        Theme::iter().collect()
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    /// Read the stored theme; anything missing or unrecognized means System
    pub fn load(storage: &LocalStorage) -> Theme {
        storage
            .get_item(THEME_STORAGE_KEY)
            .and_then(|value| Theme::from_str(value).ok())
            .unwrap_or_default()
    }

    pub fn store(self, storage: &mut LocalStorage) {
        storage.set_item(THEME_STORAGE_KEY, self.to_string());
    }
}
