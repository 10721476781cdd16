//! Configuration management for kcs-sync.
//!
//! Parses `kcs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `bookstack.base_url`
//! - `bookstack.token_id`
//! - `bookstack.token_secret`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override BookStack base URL.
    pub base_url: Option<String>,
    /// Override target book ID.
    pub book_id: Option<u64>,
    /// Override target chapter ID.
    pub chapter_id: Option<u64>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "kcs.toml";

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// BookStack configuration.
    pub bookstack: Option<BookStackConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// BookStack configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BookStackConfig {
    /// BookStack instance base URL.
    pub base_url: String,
    /// API token ID.
    pub token_id: String,
    /// API token secret.
    pub token_secret: String,
    /// Book that mirrored pages are created in.
    pub book_id: u64,
    /// Chapter within the book. Zero places pages directly in the book.
    #[serde(default)]
    pub chapter_id: u64,
}

impl BookStackConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "bookstack.base_url")?;
        require_http_url(&self.base_url, "bookstack.base_url")?;
        require_non_empty(&self.token_id, "bookstack.token_id")?;
        require_non_empty(&self.token_secret, "bookstack.token_secret")?;
        if self.book_id == 0 {
            return Err(ConfigError::Validation(
                "bookstack.book_id cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`bookstack.token_secret`").
        field: String,
        /// Error message (e.g., "${`BOOKSTACK_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `kcs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let Some(bookstack) = self.bookstack.as_mut() else {
            return;
        };
        if let Some(base_url) = &settings.base_url {
            bookstack.base_url.clone_from(base_url);
        }
        if let Some(book_id) = settings.book_id {
            bookstack.book_id = book_id;
        }
        if let Some(chapter_id) = settings.chapter_id {
            bookstack.chapter_id = chapter_id;
        }
    }

    /// Get validated BookStack configuration.
    ///
    /// Returns the BookStack config if the `[bookstack]` section is present
    /// and all fields are valid. Use this instead of accessing the
    /// `bookstack` field directly when the command requires BookStack.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_bookstack(&self) -> Result<&BookStackConfig, ConfigError> {
        let bookstack = self.bookstack.as_ref().ok_or_else(|| {
            ConfigError::Validation("[bookstack] section required in config".into())
        })?;
        bookstack.validate()?;
        Ok(bookstack)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut bookstack) = self.bookstack {
            bookstack.base_url = expand::expand_env(&bookstack.base_url, "bookstack.base_url")?;
            bookstack.token_id = expand::expand_env(&bookstack.token_id, "bookstack.token_id")?;
            bookstack.token_secret =
                expand::expand_env(&bookstack.token_secret, "bookstack.token_secret")?;
        }
        Ok(())
    }
}
