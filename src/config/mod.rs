use crate::constants::{LOG_FILE_NAME, data_files, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the Summer season dataset (JSON).
    #[serde(default = "default_summer_path")]
    pub summer_data_path: String,
    /// Path to the Winter season dataset (JSON).
    #[serde(default = "default_winter_path")]
    pub winter_data_path: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Whether to draw color swatches in the terminal. Defaults to true.
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_summer_path() -> String {
    data_files::SUMMER_DEFAULT.to_string()
}

fn default_winter_path() -> String {
    data_files::WINTER_DEFAULT.to_string()
}

fn default_color_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            summer_data_path: default_summer_path(),
            winter_data_path: default_winter_path(),
            log_file_path: None,
            color_output: default_color_output(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `OLYMPIC_MEDALS_SUMMER_DATA` - Override Summer dataset path
    /// - `OLYMPIC_MEDALS_WINTER_DATA` - Override Winter dataset path
    /// - `OLYMPIC_MEDALS_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file is unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides fields from environment variables when they are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(env_vars::SUMMER_DATA) {
            self.summer_data_path = path;
        }

        if let Ok(path) = std::env::var(env_vars::WINTER_DATA) {
            self.winter_data_path = path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.summer_data_path,
            &self.winter_data_path,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows the defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Summer Data:");
        println!("{}", config.summer_data_path);
        println!("────────────────────────────────────");
        println!("Winter Data:");
        println!("{}", config.winter_data_path);
        println!("────────────────────────────────────");
        println!("Color Output:");
        println!("{}", if config.color_output { "on" } else { "off" });
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
