//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageSettings,
    pub latency: LatencySettings,
    pub logging: LoggingSettings,
    pub shell: ShellSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

/// Where entity stores are mirrored. Without a directory the mirror lives in memory.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageSettings {
    pub enabled: bool,
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LatencySettings {
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShellSettings {
    pub initial_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                env: "development".into(),
                name: "dataspace-console".into(),
            },
            storage: StorageSettings {
                enabled: true,
                directory: None,
            },
            latency: LatencySettings { enabled: true },
            logging: LoggingSettings {
                level: "info".into(),
                json: false,
                directory: None,
            },
            shell: ShellSettings {
                initial_route: "/dashboard".into(),
            },
        }
    }
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then `APP_`-prefixed
    /// variables such as `APP_STORAGE__DIRECTORY`.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env, Self::environment())?
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn builder(
        env: &str,
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", defaults.app.name)?
            .set_default("storage.enabled", defaults.storage.enabled)?
            .set_default("latency.enabled", defaults.latency.enabled)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("shell.initial_route", defaults.shell.initial_route)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(environment))
    }
}
