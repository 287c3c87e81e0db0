use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, PagingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub paging: PagingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `DESK_CONFIG_DIR` env var, else `./.desk/`
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. `config.toml` if it exists, else defaults
    /// 4. `DESK_*` environment variable overrides
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

    /// Priority: `DESK_CONFIG_DIR` env var > `./.desk/` (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.paging.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path to the database file
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  paging: default={}, max={}",
            self.paging.default_page_size, self.paging.max_page_size
        );
        info!(
            "  validation: title={}, content={}, receivers={}, identity={}",
            self.validation.max_title_length,
            self.validation.max_content_length,
            self.validation.max_receivers,
            self.validation.max_identity_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DESK_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DESK_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("DESK_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "DESK_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "DESK_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("DESK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("DESK_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("DESK_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("DESK_LOG_COLORED", &mut self.logging.colored);

        // Paging
        Self::apply_env_parse(
            "DESK_PAGING_DEFAULT_PAGE_SIZE",
            &mut self.paging.default_page_size,
        );
        Self::apply_env_parse("DESK_PAGING_MAX_PAGE_SIZE", &mut self.paging.max_page_size);

        // Validation
        Self::apply_env_parse(
            "DESK_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "DESK_VALIDATION_MAX_CONTENT_LENGTH",
            &mut self.validation.max_content_length,
        );
        Self::apply_env_parse(
            "DESK_VALIDATION_MAX_RECEIVERS",
            &mut self.validation.max_receivers,
        );
        Self::apply_env_parse(
            "DESK_VALIDATION_MAX_IDENTITY_LENGTH",
            &mut self.validation.max_identity_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Empty value clears the option
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.is_empty());
        }
    }
}
