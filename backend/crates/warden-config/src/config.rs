use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ProvidersConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WARDEN_CONFIG_DIR env var, else use ./.warden/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WARDEN_* environment variable overrides
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
    /// Priority: WARDEN_CONFIG_DIR env var > ./.warden/ (relative to cwd)
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
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(file),
        ))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: session max age {}s, lockout after {} failures for {}m, federation {}",
            self.auth.session_max_age_secs,
            self.auth.max_failed_attempts,
            self.auth.lockout_minutes,
            if self.auth.federation_key.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );
        self.providers.log_summary();
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("WARDEN_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("WARDEN_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("WARDEN_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "WARDEN_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("WARDEN_AUTH_SESSION_SECRET", &mut self.auth.session_secret);
        Self::apply_env_parse(
            "WARDEN_AUTH_SESSION_MAX_AGE_SECS",
            &mut self.auth.session_max_age_secs,
        );
        Self::apply_env_parse(
            "WARDEN_AUTH_MAX_FAILED_ATTEMPTS",
            &mut self.auth.max_failed_attempts,
        );
        Self::apply_env_parse("WARDEN_AUTH_LOCKOUT_MINUTES", &mut self.auth.lockout_minutes);
        Self::apply_env_option_string("WARDEN_AUTH_FEDERATION_KEY", &mut self.auth.federation_key);

        // Providers
        Self::apply_env_option_string(
            "WARDEN_GOOGLE_CLIENT_ID",
            &mut self.providers.google.client_id,
        );
        Self::apply_env_option_string(
            "WARDEN_GOOGLE_CLIENT_SECRET",
            &mut self.providers.google.client_secret,
        );
        Self::apply_env_option_string(
            "WARDEN_GITHUB_CLIENT_ID",
            &mut self.providers.github.client_id,
        );
        Self::apply_env_option_string(
            "WARDEN_GITHUB_CLIENT_SECRET",
            &mut self.providers.github.client_secret,
        );

        // Logging
        Self::apply_env_parse("WARDEN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WARDEN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WARDEN_LOG_FILE", &mut self.logging.file);
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
