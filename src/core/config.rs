//! Persisted pager settings.
//!
//! The windowing constants and the default page size live in `config.json`
//! under the config directory so list views can be tuned without code changes.

use crate::core::dirs::get_config_directory;
use crate::core::error::{PageWindowError, Result};
use crate::core::page_window::{WindowOptions, DEFAULT_MAX_BUTTONS, DEFAULT_SIDE_BUTTONS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 6;

pub const CONFIG_KEYS: [&str; 3] = ["max_buttons", "side_buttons", "items_per_page"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub max_buttons: usize,
    pub side_buttons: usize,
    pub items_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_buttons: DEFAULT_MAX_BUTTONS,
            side_buttons: DEFAULT_SIDE_BUTTONS,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Config {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join("config.json"))
    }

    /// Load the user's config, falling back to defaults when none was saved
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PageWindowError::config_read_failed(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PageWindowError::config_parse_failed(path, e))?;
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PageWindowError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| PageWindowError::config_write_failed(path, e))?;

        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_max_buttons(self.max_buttons)?;
        if self.items_per_page == 0 {
            return Err(PageWindowError::ZeroItemsPerPage);
        }
        Ok(())
    }

    /// Set a single key from its string form, as given on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: usize = value
            .trim()
            .parse()
            .map_err(|_| PageWindowError::invalid_config_value(key, value))?;

        let mut updated = self.clone();
        match key {
            "max_buttons" => updated.max_buttons = parsed,
            "side_buttons" => updated.side_buttons = parsed,
            "items_per_page" => updated.items_per_page = parsed,
            _ => return Err(PageWindowError::unknown_config_key(key)),
        }
        updated.validate()?;

        *self = updated;
        Ok(())
    }

    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            max_buttons: self.max_buttons,
            side_buttons: self.side_buttons,
        }
    }
}

/// Max buttons must be odd and at least 5 so the window stays symmetric
pub fn validate_max_buttons(value: usize) -> Result<()> {
    if value < 5 || value % 2 == 0 {
        return Err(PageWindowError::invalid_max_buttons(value));
    }
    Ok(())
}
