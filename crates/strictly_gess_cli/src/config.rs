//! Display and logging configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from a TOML file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GessConfig {
    /// Symbol printed for an empty cell.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Symbol printed for a Black stone.
    #[serde(default = "default_black_symbol")]
    black_symbol: char,

    /// Symbol printed for a White stone.
    #[serde(default = "default_white_symbol")]
    white_symbol: char,

    /// Print column letters and row numbers around the board.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_empty_symbol() -> char {
    '.'
}

fn default_black_symbol() -> char {
    'B'
}

fn default_white_symbol() -> char {
    'W'
}

fn default_show_coordinates() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GessConfig {
    fn default() -> Self {
        Self {
            empty_symbol: default_empty_symbol(),
            black_symbol: default_black_symbol(),
            white_symbol: default_white_symbol(),
            show_coordinates: default_show_coordinates(),
            log_filter: default_log_filter(),
        }
    }
}

impl GessConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the symbols clash.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(show_coordinates = config.show_coordinates, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or clashing symbols.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path` when given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// See [`GessConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.black_symbol == self.white_symbol {
            return Err(ConfigError::new(format!(
                "Black and White share the symbol '{}'",
                self.black_symbol
            )));
        }
        if self.empty_symbol == self.black_symbol || self.empty_symbol == self.white_symbol {
            return Err(ConfigError::new(format!(
                "Empty cells cannot use the stone symbol '{}'",
                self.empty_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
