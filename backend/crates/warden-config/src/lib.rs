mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod providers_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use providers_config::{ProviderConfig, ProvidersConfig};
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "WARDEN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".warden";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "warden.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const MIN_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;
const MIN_SESSION_MAX_AGE_SECS: i64 = 60;
const MAX_SESSION_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;
const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 5;
const MIN_MAX_FAILED_ATTEMPTS: u32 = 1;
const MAX_MAX_FAILED_ATTEMPTS: u32 = 100;
const DEFAULT_LOCKOUT_MINUTES: i64 = 15;
const MIN_LOCKOUT_MINUTES: i64 = 1;
const MAX_LOCKOUT_MINUTES: i64 = 24 * 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
