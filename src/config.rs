use config::builder::{ConfigBuilder, DefaultState};
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Header of every shopping list rendering and the email subject
    #[serde(default = "default_export_title")]
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: default_export_title(),
        }
    }
}

fn default_export_title() -> String {
    feast_shopping::export::DEFAULT_TITLE.to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `DATABASE_URL`
    /// 2. Environment variables (FEAST__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        let mut builder = Self::file_layers(&config_file_path)?.add_source(
            Environment::with_prefix("FEAST")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Hardcoded defaults overlaid with the config file, if it exists
    fn file_layers(config_file_path: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = ::config::Config::builder()
            .set_default("database.url", "sqlite:feast.db")?
            .set_default("database.max_connections", 5)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("export.title", default_export_title())?;

        // Optional: a missing file leaves the defaults in place
        if std::path::Path::new(config_file_path).exists() {
            builder = builder.add_source(File::with_name(config_file_path));
        }

        Ok(builder)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.export.title.trim().is_empty() {
            return Err("Export title must not be empty".to_string());
        }
        Ok(())
    }
}
