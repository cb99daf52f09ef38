//! Config file parsing and the defaults → file → env → CLI chain.

use crate::layout::{LayoutConfiguration, DEFAULT_HEADER_HEIGHT};
use crate::model::{EdgeInsets, Size};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Padding used by the demo host around and between cells.
pub const DEFAULT_PADDING: f64 = 8.0;

/// Bottom inset below every section in the demo host.
pub const DEFAULT_SECTION_GAP: f64 = 32.0;

/// Height of every cell in the demo host.
pub const DEFAULT_ITEM_HEIGHT: f64 = 64.0;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STRETCHY_CONFIG";

/// Environment variable overriding the header height.
pub const HEADER_HEIGHT_ENV_VAR: &str = "STRETCHY_HEADER_HEIGHT";

/// Failure to load a config file that exists, or to apply an override.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config path could not be resolved.
    #[error("Unusable config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Cannot read config {path}: {reason}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Malformed config {path}: {reason}")]
    ParseError {
        /// File that failed to parse.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An override environment variable is set to an unusable value.
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// The raw value found in the environment.
        value: String,
        /// Parse error details.
        reason: String,
    },
}

/// Contents of `config.toml`.
///
/// Every field is optional; absent fields keep their defaults.
///
/// ```toml
/// header_height = 160.0
/// item_height = 48.0
///
/// [section_insets]
/// top = 8.0
/// left = 16.0
/// bottom = 24.0
/// right = 16.0
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Resting header height.
    #[serde(default)]
    pub header_height: Option<f64>,

    /// Vertical gap between items.
    #[serde(default)]
    pub item_spacing: Option<f64>,

    /// Fixed item width. When absent, items span the viewport minus the
    /// horizontal insets.
    #[serde(default)]
    pub item_width: Option<f64>,

    /// Item height.
    #[serde(default)]
    pub item_height: Option<f64>,

    /// Section insets.
    #[serde(default)]
    pub section_insets: Option<EdgeInsets>,

    /// Number of sections in the demo dataset.
    #[serde(default)]
    pub sections: Option<usize>,

    /// Items per section in the demo dataset.
    #[serde(default)]
    pub items_per_section: Option<usize>,

    /// Demo viewport width.
    #[serde(default)]
    pub viewport_width: Option<f64>,

    /// Demo viewport height.
    #[serde(default)]
    pub viewport_height: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Configuration with every layer applied.
///
/// Built by [`merge_config`] and refined by the env and CLI override passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Resting header height.
    pub header_height: f64,
    /// Vertical gap between items.
    pub item_spacing: f64,
    /// Fixed item width, or `None` to track the viewport.
    pub item_width: Option<f64>,
    /// Item height.
    pub item_height: f64,
    /// Section insets.
    pub section_insets: EdgeInsets,
    /// Number of sections in the demo dataset.
    pub sections: usize,
    /// Items per section in the demo dataset.
    pub items_per_section: usize,
    /// Demo viewport size.
    pub viewport: Size,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            item_spacing: DEFAULT_PADDING,
            item_width: None,
            item_height: DEFAULT_ITEM_HEIGHT,
            section_insets: EdgeInsets::new(
                DEFAULT_PADDING,
                DEFAULT_PADDING,
                DEFAULT_SECTION_GAP,
                DEFAULT_PADDING,
            ),
            sections: 4,
            items_per_section: 16,
            viewport: Size::new(375.0, 667.0),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Item width for a given viewport width.
    pub fn item_width_for(&self, viewport_width: f64) -> f64 {
        self.item_width
            .unwrap_or_else(|| (viewport_width - self.section_insets.horizontal()).max(0.0))
    }

    /// Layout configuration for a given viewport width.
    pub fn layout_configuration(&self, viewport_width: f64) -> LayoutConfiguration {
        LayoutConfiguration::new(
            self.section_insets,
            Size::new(self.item_width_for(viewport_width), self.item_height),
            self.item_spacing,
            self.header_height,
        )
    }
}

/// Where logs go when no path is configured: `<state_dir>/stretchy/stretchy.log`,
/// or `stretchy.log` in the working directory on platforms without a state dir.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("stretchy").join("stretchy.log")
    } else {
        PathBuf::from("stretchy.log")
    }
}

/// Parse the config file at `path`.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// `ReadError` or `ParseError` when the file exists but is unusable.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Platform config location, `~/.config/stretchy/config.toml` on Linux.
///
/// `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stretchy").join("config.toml"))
}

/// Find and parse the config file.
///
/// Lookup order:
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `STRETCHY_CONFIG` environment variable
/// 3. Default path `~/.config/stretchy/config.toml`
///
/// The first candidate wins even if it does not exist.
///
/// # Errors
///
/// As [`load_config_file`].
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Overlay the file's fields on the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        header_height: config.header_height.unwrap_or(defaults.header_height),
        item_spacing: config.item_spacing.unwrap_or(defaults.item_spacing),
        item_width: config.item_width.or(defaults.item_width),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        section_insets: config.section_insets.unwrap_or(defaults.section_insets),
        sections: config.sections.unwrap_or(defaults.sections),
        items_per_section: config
            .items_per_section
            .unwrap_or(defaults.items_per_section),
        viewport: Size::new(
            config.viewport_width.unwrap_or(defaults.viewport.width),
            config.viewport_height.unwrap_or(defaults.viewport.height),
        ),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Overlay environment variables.
///
/// Checks for:
/// - `STRETCHY_HEADER_HEIGHT`: Override header height
///
/// Runs before logging is installed, so a bad value is an error rather than
/// a warning.
///
/// # Errors
/// `ConfigError::InvalidEnvValue` if a variable is set but does not parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(HEADER_HEIGHT_ENV_VAR) {
        let height = raw.trim().parse::<f64>().map_err(|e| ConfigError::InvalidEnvValue {
            var: HEADER_HEIGHT_ENV_VAR,
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        config.header_height = height;
    }

    Ok(config)
}

/// Overrides collected from CLI flags. `None` means the flag was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CliOverrides {
    /// `--width`
    pub viewport_width: Option<f64>,
    /// `--height`
    pub viewport_height: Option<f64>,
    /// `--sections`
    pub sections: Option<usize>,
    /// `--items`
    pub items_per_section: Option<usize>,
}

/// Overlay flags given on the command line.
///
/// Last and strongest layer of the chain.
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(width) = overrides.viewport_width {
        config.viewport.width = width;
    }

    if let Some(height) = overrides.viewport_height {
        config.viewport.height = height;
    }

    if let Some(sections) = overrides.sections {
        config.sections = sections;
    }

    if let Some(items) = overrides.items_per_section {
        config.items_per_section = items;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
