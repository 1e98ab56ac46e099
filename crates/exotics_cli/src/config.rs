//! CLI configuration management
//!
//! Settings are resolved from four sources, highest priority first:
//!
//! 1. Command-line flags
//! 2. Environment variables (`EXOTICS_SEED`, `EXOTICS_PATHS`, `EXOTICS_LOG_LEVEL`)
//! 3. TOML configuration file (`exotics.toml` by default; a missing file is
//!    not an error)
//! 4. Built-in defaults

use std::path::Path;
use std::str::FromStr;

use pricer_exotics::mc::{Discretisation, MAX_PATHS};
use serde::Deserialize;
use thiserror::Error;

use crate::output::OutputFormat;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid seed: {0}. Must be a non-negative integer")]
    InvalidSeed(String),

    #[error("Invalid path count: {0}. Must be between 1 and {max}", max = MAX_PATHS)]
    InvalidPathCount(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExoticsConfig {
    /// Base seed for every command
    pub seed: u64,
    /// Monte Carlo path count
    pub n_paths: usize,
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Path discretisation
    #[serde(deserialize_with = "deserialize_scheme")]
    pub scheme: Discretisation,
    /// Output format
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_scheme<'de, D>(deserializer: D) -> Result<Discretisation, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Discretisation::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ExoticsConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_paths: 1000,
            log_level: LogLevel::default(),
            scheme: Discretisation::default(),
            format: OutputFormat::default(),
        }
    }
}

/// Per-invocation overrides taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Seed override
    pub seed: Option<u64>,
    /// Path count override
    pub n_paths: Option<usize>,
    /// Discretisation override
    pub scheme: Option<Discretisation>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Forces debug logging
    pub verbose: bool,
}

impl ExoticsConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ExoticsConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("EXOTICS_SEED") {
            self.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
        }

        if let Some(paths) = lookup("EXOTICS_PATHS") {
            self.n_paths = paths
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPathCount(paths.clone()))?;
        }

        if let Some(level) = lookup("EXOTICS_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(level.trim())?;
        }

        self.validate()
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(n_paths) = cli.n_paths {
            self.n_paths = n_paths;
        }
        if let Some(scheme) = cli.scheme {
            self.scheme = scheme;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths.to_string()));
        }
        Ok(())
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<ExoticsConfig, ConfigError> {
    let mut config = ExoticsConfig::load_or_default(path)?;
    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ExoticsConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.n_paths, 1000);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.scheme, Discretisation::Euler);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_from_toml_full() {
        let config = ExoticsConfig::from_toml(
            r#"
            seed = 7
            n_paths = 5000
            log_level = "info"
            scheme = "lognormal"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.n_paths, 5000);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.scheme, Discretisation::LogNormal);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = ExoticsConfig::from_toml("seed = 99").unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.n_paths, 1000);
        assert_eq!(config.scheme, Discretisation::Euler);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            ExoticsConfig::from_toml("scheme = \"milstein\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            ExoticsConfig::from_toml("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            ExoticsConfig::from_toml("n_paths = 0"),
            Err(ConfigError::InvalidPathCount(_))
        ));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let config =
            ExoticsConfig::load_or_default(Path::new("/nonexistent/exotics.toml")).unwrap();
        assert_eq!(config, ExoticsConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ExoticsConfig::default();
        config
            .apply_env_with(env(&[
                ("EXOTICS_SEED", "123"),
                ("EXOTICS_PATHS", " 2500 "),
                ("EXOTICS_LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.seed, 123);
        assert_eq!(config.n_paths, 2500);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = ExoticsConfig::default();
        assert!(matches!(
            config.apply_env_with(env(&[("EXOTICS_SEED", "-1")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            config.apply_env_with(env(&[("EXOTICS_PATHS", "many")])),
            Err(ConfigError::InvalidPathCount(_))
        ));
        assert!(matches!(
            config.apply_env_with(env(&[("EXOTICS_LOG_LEVEL", "verbose")])),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = ExoticsConfig::default();
        config.apply_env_with(env(&[("EXOTICS_SEED", "5")])).unwrap();
        config.merge_with_cli(&CliOverrides {
            seed: Some(6),
            n_paths: Some(10),
            scheme: Some(Discretisation::LogNormal),
            format: Some(OutputFormat::Json),
            verbose: true,
        });

        assert_eq!(config.seed, 6);
        assert_eq!(config.n_paths, 10);
        assert_eq!(config.scheme, Discretisation::LogNormal);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
