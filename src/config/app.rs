//! Main application configuration
//!
//! This module defines the primary configuration structures for the elo-ledger
//! batch run, including environment variable and TOML file loading and
//! validation.

use crate::config::rating::RatingSettings;
use crate::io::reader::MatchReaderConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Match log location and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// CSV match log, one match per row in chronological order
    pub path: PathBuf,
    pub player_a_column: String,
    pub player_b_column: String,
    pub outcome_column: String,
}

/// Rating table destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Two-column CSV written after the run
    pub path: PathBuf,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-ledger".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        let columns = MatchReaderConfig::default();
        Self {
            path: PathBuf::from("cleaned_data.csv"),
            player_a_column: columns.player_a_column,
            player_b_column: columns.player_b_column,
            outcome_column: columns.outcome_column,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("rankings.csv"),
        }
    }
}

impl InputSettings {
    /// Column layout for the match reader
    pub fn reader_config(&self) -> MatchReaderConfig {
        MatchReaderConfig {
            player_a_column: self.player_a_column.clone(),
            player_b_column: self.player_b_column.clone(),
            outcome_column: self.outcome_column.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Override fields from environment variables
    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Rating settings
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            self.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(default_rating) = env::var("ELO_DEFAULT_RATING") {
            self.rating.default_rating = default_rating
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEFAULT_RATING value: {}", default_rating))?;
        }

        // Input settings
        if let Ok(path) = env::var("ELO_INPUT_PATH") {
            self.input.path = PathBuf::from(path);
        }
        if let Ok(column) = env::var("ELO_PLAYER_A_COLUMN") {
            self.input.player_a_column = column;
        }
        if let Ok(column) = env::var("ELO_PLAYER_B_COLUMN") {
            self.input.player_b_column = column;
        }
        if let Ok(column) = env::var("ELO_OUTCOME_COLUMN") {
            self.input.outcome_column = column;
        }

        // Output settings
        if let Ok(path) = env::var("ELO_OUTPUT_PATH") {
            self.output.path = PathBuf::from(path);
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate rating settings
    if !config.rating.k_factor.is_finite() || config.rating.k_factor <= 0.0 {
        return Err(anyhow!("K-factor must be positive"));
    }
    if !config.rating.default_rating.is_finite() {
        return Err(anyhow!("Default rating must be a finite number"));
    }

    // Validate input settings
    if config.input.path.as_os_str().is_empty() {
        return Err(anyhow!("Input path cannot be empty"));
    }
    for column in [
        &config.input.player_a_column,
        &config.input.player_b_column,
        &config.input.outcome_column,
    ] {
        if column.is_empty() {
            return Err(anyhow!("Input column names cannot be empty"));
        }
    }
    if config.input.player_a_column == config.input.player_b_column {
        return Err(anyhow!(
            "Participant columns must differ: {}",
            config.input.player_a_column
        ));
    }

    // Validate output settings
    if config.output.path.as_os_str().is_empty() {
        return Err(anyhow!("Output path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();

        assert!(validate_config(&config).is_ok());
        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.default_rating, 1500.0);
        assert_eq!(config.input.path, PathBuf::from("cleaned_data.csv"));
        assert_eq!(config.output.path, PathBuf::from("rankings.csv"));
        assert_eq!(config.input.reader_config(), MatchReaderConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [rating]
            k_factor = 24.0

            [output]
            path = "out/ratings.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.rating.k_factor, 24.0);
        assert_eq!(config.rating.default_rating, 1500.0);
        assert_eq!(config.output.path, PathBuf::from("out/ratings.csv"));
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.input.outcome_column, "W/L");
    }

    #[test]
    fn test_full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            name = "ratings"
            log_level = "debug"

            [rating]
            k_factor = 16.0
            default_rating = 1200.0

            [input]
            path = "games.csv"
            player_a_column = "white"
            player_b_column = "black"
            outcome_column = "result"

            [output]
            path = "table.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.name, "ratings");
        assert_eq!(config.rating.default_rating, 1200.0);
        assert_eq!(config.input.reader_config().player_b_column, "black");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_toml_str("[rating]\nk_factor = 0.0\n").is_err());
        assert!(AppConfig::from_toml_str("[rating]\nk_factor = -8.0\n").is_err());
        assert!(AppConfig::from_toml_str("[service]\nlog_level = \"loud\"\n").is_err());
        assert!(AppConfig::from_toml_str("[input]\noutcome_column = \"\"\n").is_err());
        assert!(AppConfig::from_toml_str(
            "[input]\nplayer_a_column = \"x\"\nplayer_b_column = \"x\"\n"
        )
        .is_err());
        assert!(AppConfig::from_toml_str("[rating]\nk_factor = \"fast\"\n").is_err());
    }

    #[test]
    fn test_settings_build_calculator() {
        use crate::rating::RatingCalculator;

        let settings = RatingSettings {
            k_factor: 10.0,
            default_rating: 1000.0,
        };
        let calculator = settings.calculator().unwrap();

        assert_eq!(calculator.k_factor(), 10.0);
        assert_eq!(calculator.initial_rating(), 1000.0);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("elo-ledger-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[rating]\nk_factor = 40.0\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.rating.k_factor, 40.0);

        std::fs::remove_file(&path).ok();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
