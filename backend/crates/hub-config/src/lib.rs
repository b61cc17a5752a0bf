mod activity_log_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mutation_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use activity_log_config::ActivityLogConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mutation_config::MutationConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const ENV_PREFIX: &str = "HUB_";
pub const CONFIG_DIR_ENV: &str = "HUB_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".hub";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
