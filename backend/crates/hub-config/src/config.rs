use crate::{
    ActivityLogConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, ENV_PREFIX, LoggingConfig, MutationConfig, ServerConfig,
    ValidationConfig,
};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::PathBuf;
use std::str::FromStr;

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub activity_log: ActivityLogConfig,
    pub validation: ValidationConfig,
    pub mutation: MutationConfig,
}

impl Config {
    /// Load config.
    ///
    /// 1. Config directory: `HUB_CONFIG_DIR`, else `./.hub/` (created if missing)
    /// 2. `config.toml` in that directory if present, else defaults
    /// 3. `HUB_*` environment overrides on top
    ///
    /// Does NOT validate; call `validate()` after `load()`.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|e| ConfigError::parse(&config_path, e))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(ConfigError::io(&config_path, e)),
        };

        config.apply_env_overrides(|name| std::env::var(format!("{ENV_PREFIX}{name}")).ok());

        Ok(config)
    }

    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::ConfigDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Check every section; the first invalid setting wins.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.activity_log.validate()?;
        self.validation.validate()?;
        self.mutation.validate()
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path of the log file, or `None` for stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  activity_log: default_limit={}, max_limit={}",
            self.activity_log.default_limit, self.activity_log.max_limit
        );
        info!(
            "  validation: title={}, desc={}, comment={}, statuses={}, enforce_status={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_comment_length,
            self.validation.max_statuses,
            self.validation.enforce_status_membership
        );
        info!(
            "  mutation: max_write_attempts={}",
            self.mutation.max_write_attempts
        );
    }

    /// `lookup` maps a name without the `HUB_` prefix to its raw value.
    /// Unparseable values leave the setting untouched.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        set_parsed(lookup("SERVER_HOST"), &mut self.server.host);
        set_parsed(lookup("SERVER_PORT"), &mut self.server.port);

        set_parsed(lookup("DATABASE_PATH"), &mut self.database.path);

        set_parsed(lookup("LOG_LEVEL"), &mut self.logging.level);
        set_flag(lookup("LOG_COLORED"), &mut self.logging.colored);
        if let Some(file) = lookup("LOG_FILE") {
            self.logging.file = Some(file);
        }
        set_parsed(lookup("LOG_DIR"), &mut self.logging.dir);

        let activity = &mut self.activity_log;
        set_parsed(lookup("ACTIVITY_LOG_DEFAULT_LIMIT"), &mut activity.default_limit);
        set_parsed(lookup("ACTIVITY_LOG_MAX_LIMIT"), &mut activity.max_limit);

        let validation = &mut self.validation;
        set_parsed(lookup("VALIDATION_MAX_TITLE_LENGTH"), &mut validation.max_title_length);
        set_parsed(
            lookup("VALIDATION_MAX_DESCRIPTION_LENGTH"),
            &mut validation.max_description_length,
        );
        set_parsed(
            lookup("VALIDATION_MAX_COMMENT_LENGTH"),
            &mut validation.max_comment_length,
        );
        set_parsed(lookup("VALIDATION_MAX_STATUSES"), &mut validation.max_statuses);
        set_flag(
            lookup("VALIDATION_ENFORCE_STATUS_MEMBERSHIP"),
            &mut validation.enforce_status_membership,
        );

        set_parsed(
            lookup("MUTATION_MAX_WRITE_ATTEMPTS"),
            &mut self.mutation.max_write_attempts,
        );
    }
}

fn set_parsed<T: FromStr>(raw: Option<String>, target: &mut T) {
    if let Some(value) = raw.and_then(|raw| raw.trim().parse().ok()) {
        *target = value;
    }
}

/// "true" and "1" enable, any other value disables
fn set_flag(raw: Option<String>, target: &mut bool) {
    if let Some(raw) = raw {
        *target = matches!(raw.trim(), "true" | "1");
    }
}
