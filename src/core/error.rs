//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PageWindowError`] which covers every failure outside the
//! page range calculator itself. The calculator is total and has no error
//! channel; paging state, configuration, and item loading do.
//!
//! # Public API
//! - [`PageWindowError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PageWindowError>`
//!
//! # Error Categories
//! - **Paging**: Zero page size
//! - **Configuration**: Invalid values, unknown keys, unreadable config files
//! - **Input**: I/O and UTF-8 failures while reading list items

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for page-window
#[derive(Error, Debug)]
pub enum PageWindowError {
    // Paging errors
    #[error("Items per page must be at least 1")]
    ZeroItemsPerPage,

    #[error("Invalid max buttons: {value}. Use an odd number of at least 5")]
    InvalidMaxButtons { value: usize },

    // Config errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Unknown config key: '{key}'. Known keys: max_buttons, side_buttons, items_per_page")]
    UnknownConfigKey { key: String },

    #[error("Invalid value for '{key}': '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Input errors
    #[error("Failed to read items from '{path}': {source}")]
    ItemsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PageWindowError
pub type Result<T> = std::result::Result<T, PageWindowError>;

impl PageWindowError {
    /// Create an invalid max buttons error
    pub fn invalid_max_buttons(value: usize) -> Self {
        Self::InvalidMaxButtons { value }
    }

    /// Create an unknown config key error
    pub fn unknown_config_key(key: impl Into<String>) -> Self {
        Self::UnknownConfigKey { key: key.into() }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an items read failed error
    pub fn items_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ItemsReadFailed {
            path: path.into(),
            source,
        }
    }
}
