// src/config/toolkit_config.rs

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Toolkit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Miller-Rabin rounds used when the CLI tests primality
    pub precision: u32,

    /// Output formatting
    pub output: OutputConfig,
}

/// Output formatting for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit results as JSON instead of plain text
    pub json: bool,

    /// Sort factor lists ascending before printing
    pub sorted: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        ToolkitConfig {
            log_level: "info".to_string(),
            precision: 7,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json: false,
            sorted: true,
        }
    }
}

impl ToolkitConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("ntheory.toml").exists() {
            builder = builder.add_source(File::with_name("ntheory.toml"));
        } else if Path::new("ntheory.yaml").exists() {
            builder = builder.add_source(File::with_name("ntheory.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("precision", 7)?
            .set_default("output.json", false)?
            .set_default("output.sorted", true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: NTHEORY_)
        let builder = builder.add_source(
            Environment::with_prefix("NTHEORY")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolkitConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.precision, 7);
        assert_eq!(config.output.json, false);
        assert_eq!(config.output.sorted, true);
    }

    #[test]
    fn test_load_without_file() {
        // Should fall back to defaults when no config file exists
        let config = ToolkitConfig::load().unwrap_or_else(|_| ToolkitConfig::default());
        assert_eq!(config.precision, 7);
    }
}
