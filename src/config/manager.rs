use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{
    DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_CHECK_SESSION_PATH, DEFAULT_RESET_PATH, Endpoints,
};
use crate::paths;

/// Settings in the `[esgen]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgenConfig {
    /// Backend base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Chat target, relative to `base_url` or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_path: Option<String>,
    /// Reset target, relative to `base_url` or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_path: Option<String>,
    /// Session status target, relative to `base_url` or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_session_path: Option<String>,
    /// Request timeout in seconds. No timeout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/esgen/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub esgen: EsgenConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoints: Endpoints,
    pub timeout: Option<Duration>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Base URL override.
    pub base_url: Option<String>,
    /// Timeout override in seconds. `0` disables the timeout.
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if any endpoint is not a valid http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.esgen;

    let base_url = options
        .base_url
        .as_deref()
        .or(file.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    let endpoints = Endpoints::resolve(
        base_url,
        file.chat_path.as_deref().unwrap_or(DEFAULT_CHAT_PATH),
        file.reset_path.as_deref().unwrap_or(DEFAULT_RESET_PATH),
        file.check_session_path
            .as_deref()
            .unwrap_or(DEFAULT_CHECK_SESSION_PATH),
    )
    .with_context(|| {
        format!(
            "Invalid backend configuration\n\n\
             Check --base-url or the [esgen] section of {}",
            paths::config_dir().join("config.toml").display()
        )
    })?;

    let timeout = options
        .timeout_secs
        .or(file.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    Ok(ResolvedConfig { endpoints, timeout })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/esgen/config.toml`
    /// or `~/.config/esgen/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.exists() {
            return Ok(ConfigFile::default());
        }
        self.load()
    }

    /// Writes a config file with the defaults filled in, refusing to
    /// overwrite an existing one.
    pub fn init_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            bail!(
                "Config file already exists: {}",
                self.config_path.display()
            );
        }

        let config = ConfigFile {
            esgen: EsgenConfig {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
                chat_path: Some(DEFAULT_CHAT_PATH.to_string()),
                reset_path: Some(DEFAULT_RESET_PATH.to_string()),
                check_session_path: Some(DEFAULT_CHECK_SESSION_PATH.to_string()),
                timeout_secs: None,
            },
        };
        self.save(&config)?;
        Ok(config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
