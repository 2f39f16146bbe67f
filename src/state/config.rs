use crate::error::Result;
use crate::libs::{ GalleryQuery, SortDirection, SortOption, ViewMode };
use crate::state::paths;
use crate::utils::data;
use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::path::Path;

/// Last used gallery controls, restored on the next visit
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryPreferences {
    pub sort: SortOption,
    pub direction: SortDirection,
    pub view: ViewMode,
}

/// Changes requested from the gallery controls for one visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceOverrides {
    pub sort: Option<SortOption>,
    pub direction: Option<SortDirection>,
    /// Flip the saved direction (the chevron button)
    pub flip: bool,
    pub view: Option<ViewMode>,
}

impl PreferenceOverrides {
    pub fn is_empty(&self) -> bool {
        self.sort.is_none() && self.direction.is_none() && !self.flip && self.view.is_none()
    }
}

impl GalleryPreferences {
    pub fn query(&self, search: impl Into<String>) -> GalleryQuery {
        GalleryQuery::new(search, self.sort, self.direction)
    }

    /// Apply `overrides` on top of the saved values. An explicit direction wins over a flip.
    pub fn apply_overrides(&mut self, overrides: &PreferenceOverrides) {
        if let Some(sort) = overrides.sort {
            self.sort = sort;
        }
        match overrides.direction {
            Some(direction) => self.direction = direction,
            None if overrides.flip => self.direction = self.direction.toggled(),
            None => {}
        }
        if let Some(view) = overrides.view {
            self.view = view;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    // Metadata
    pub version: String,
    pub last_updated: DateTime<Utc>,
    // UI settings
    #[serde(default)]
    pub gallery: GalleryPreferences,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
}

fn default_sidebar_open() -> bool {
    true
}

impl AppConfig {
    /// Load the config from the data directory
    pub fn load() -> Self {
        Self::load_from(&paths::config_json())
    }

    /// Load config from `config_path`, falling back to defaults (and writing them)
    /// if the file doesn't exist or is invalid
    pub fn load_from(config_path: &Path) -> Self {
        match data::load_json_from_file::<AppConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                crate::debug_eprint!("⚠️ Failed to load config file: {}. Using defaults.", e);
                let default_config = Self::default();
                if let Err(e) = default_config.save_to(config_path) {
                    crate::always_eprint!("❌ Failed to write default config: {}", e);
                }
                default_config
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::config_json())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        data::save_json_to_file(self, config_path)
    }

    /// Apply gallery overrides and persist them. Returns false (and writes nothing)
    /// when there is nothing to change.
    pub fn apply_gallery_overrides(
        &mut self,
        config_path: &Path,
        overrides: &PreferenceOverrides
    ) -> Result<bool> {
        if overrides.is_empty() {
            return Ok(false);
        }
        self.update_at(config_path, |c| c.gallery.apply_overrides(overrides))?;
        Ok(true)
    }

    /// Apply `updater`, stamp the change and save
    pub fn update_at(
        &mut self,
        config_path: &Path,
        updater: impl FnOnce(&mut AppConfig)
    ) -> Result<()> {
        updater(self);
        self.last_updated = Utc::now();
        self.save_to(config_path)?;
        crate::debug_print!("[config] Config updated");
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: crate::utils::constants::APP_VERSION.to_string(),
            last_updated: Utc::now(),
            gallery: GalleryPreferences::default(),
            sidebar_open: default_sidebar_open(),
        }
    }
}
