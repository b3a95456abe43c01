use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, SessionConfig, StorageConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for LU_CONFIG_DIR env var, else use ./.linkup/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LU_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LU_CONFIG_DIR env var > ./.linkup/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.validation.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.trim().is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    /// Absolute path of the durable storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if logging to a file.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Where log records go: the configured file name, or stderr.
    pub fn log_target(&self) -> &str {
        self.logging.file.as_deref().unwrap_or("stderr")
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.dir);
        info!(
            "  session: backup_corrupted={}",
            self.session.backup_corrupted
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.log_target()
        );
        info!(
            "  validation: username={}, display_name={}, password>={}, tweet={}",
            self.validation.max_username_length,
            self.validation.max_display_name_length,
            self.validation.min_password_length,
            self.validation.max_tweet_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("LU_STORAGE_DIR", &mut self.storage.dir);

        // Session
        Self::apply_env_bool(
            "LU_SESSION_BACKUP_CORRUPTED",
            &mut self.session.backup_corrupted,
        );

        // Logging
        Self::apply_env_parse("LU_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LU_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LU_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "LU_VALIDATION_MAX_USERNAME_LENGTH",
            &mut self.validation.max_username_length,
        );
        Self::apply_env_parse(
            "LU_VALIDATION_MAX_DISPLAY_NAME_LENGTH",
            &mut self.validation.max_display_name_length,
        );
        Self::apply_env_parse(
            "LU_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "LU_VALIDATION_MAX_TWEET_LENGTH",
            &mut self.validation.max_tweet_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
