use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::utils::locale::is_valid_locale;

/// Stock default locale used when no configuration overrides it.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale applied when a request or parent locale is rejected.
    pub default_locale: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        // 1. Load from config file
        let mut config = if let Some(config_path) = Self::find_config_file() {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        // 2. Override with environment variables
        config.apply_env_overrides();

        // 3. Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_DEFAULT_LOCALE: Fallback locale (default: en)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,locale_sync=debug")
    /// - APP_LOG_FILE: Log file path (empty value disables file logging)
    fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var("APP_DEFAULT_LOCALE") {
            self.i18n.default_locale = locale;
            tracing::info!(
                "Override i18n.default_locale from env: {}",
                self.i18n.default_locale
            );
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(file) = std::env::var("APP_LOG_FILE") {
            self.logging.file = if file.is_empty() { None } else { Some(file) };
            tracing::info!("Override logging.file from env");
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if !is_valid_locale(&self.i18n.default_locale) {
            anyhow::bail!(
                "i18n.default_locale {:?} is not a valid locale identifier",
                self.i18n.default_locale
            );
        }

        if self.logging.level.is_empty() {
            anyhow::bail!("logging.level cannot be empty");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { default_locale: DEFAULT_LOCALE.to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,locale_sync=debug".to_string(),
            file: Some("logs/locale-sync.log".to_string()),
        }
    }
}
