//! Configuration management

use clap::Parser;
use config::builder::DefaultState;
use config::{
    Config as ConfigBuilder, ConfigBuilder as Builder, ConfigError as BuilderError, Environment,
    File,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Public endpoint serving the entertainment catalog
pub const DEFAULT_CATALOG_ENDPOINT: &str =
    "https://67718380ee76b92dd48fe35d.mockapi.io/funbun/entertainment";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid catalog configuration: {0}")]
    InvalidCatalog(String),

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

impl From<BuilderError> for ConfigError {
    fn from(err: BuilderError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with precedence: CLI args > Environment variables > Config file > Defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_args(&CliArgs::parse())
    }

    /// Build configuration from already-parsed command-line arguments
    pub fn from_args(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        // 1. Defaults
        let mut builder = with_defaults(ConfigBuilder::builder())?;

        // 2. Config file
        if let Some(config_path) = &cli_args.config {
            if !config_path.exists() {
                return Err(ConfigError::FileNotFound(
                    config_path.display().to_string(),
                ));
            }
            builder = builder.add_source(File::from(config_path.as_path()));
        }

        // 3. Environment variables, e.g. FUNBUN__CATALOG__ENDPOINT
        builder = builder.add_source(
            Environment::with_prefix("FUNBUN")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI arguments
        if let Some(endpoint) = &cli_args.endpoint {
            builder = builder.set_override("catalog.endpoint", endpoint.clone())?;
        }
        if let Some(log_level) = &cli_args.log_level {
            builder = builder.set_override("logging.level", log_level.clone())?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file path, on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config: Config = with_defaults(ConfigBuilder::builder())?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
                request_timeout: 30,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "text".to_string(),
                output: "stderr".to_string(),
                log_file: None,
            },
        }
    }
}

fn with_defaults(builder: Builder<DefaultState>) -> Result<Builder<DefaultState>, ConfigError> {
    Ok(builder
        .set_default("catalog.endpoint", DEFAULT_CATALOG_ENDPOINT)?
        .set_default("catalog.request_timeout", 30)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?)
}

/// Command-line arguments for configuration override
#[derive(Debug, Default, Parser)]
#[command(name = "fun-bun")]
#[command(about = "Fun Bun terminal client", long_about = None)]
pub struct CliArgs {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub request_timeout: u64, // seconds
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidCatalog(format!("endpoint is not a valid URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidCatalog(
                "endpoint must use http or https".to_string(),
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidCatalog("request_timeout must be greater than 0".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::InvalidLogging(
                format!("level must be one of: {:?}", valid_levels)
            ));
        }

        let valid_formats = ["json", "text"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidLogging(
                format!("format must be one of: {:?}", valid_formats)
            ));
        }

        // stdout is reserved for the interactive screens
        let valid_outputs = ["stderr", "file"];
        if !valid_outputs.contains(&self.output.as_str()) {
            return Err(ConfigError::InvalidLogging(
                format!("output must be one of: {:?}", valid_outputs)
            ));
        }

        if self.output == "file" && self.log_file.is_none() {
            return Err(ConfigError::InvalidLogging(
                "log_file must be specified when output is 'file'".to_string()
            ));
        }

        Ok(())
    }
}
