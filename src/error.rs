use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    // Season dataset errors
    #[error("Medal data file not found: {path}")]
    DataNotFound { path: String },

    #[error("Malformed medal data in {path}: {message}")]
    DataParse { path: String, message: String },

    #[error("Invalid year key '{key}' in {path}")]
    InvalidYearKey { key: String, path: String },

    #[error("No medal data for year {year}")]
    UnknownYear { year: i32 },

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing data file error
    pub fn data_not_found(path: impl Into<String>) -> Self {
        Self::DataNotFound { path: path.into() }
    }

    /// Create a malformed season payload error
    pub fn data_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an error for a year key that is not an integer
    pub fn invalid_year_key(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidYearKey {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Create an error for a year that is neither in the data nor cancelled
    pub fn unknown_year(year: i32) -> Self {
        Self::UnknownYear { year }
    }

    /// Check if error originates from the season datasets rather than the
    /// application environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::DataNotFound { .. }
                | AppError::DataParse { .. }
                | AppError::InvalidYearKey { .. }
                | AppError::UnknownYear { .. }
                | AppError::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_data_not_found_helper() {
        let error = AppError::data_not_found("data/summer_medals.json");
        assert!(matches!(error, AppError::DataNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "Medal data file not found: data/summer_medals.json"
        );
    }

    #[test]
    fn test_data_parse_helper() {
        let error = AppError::data_parse("winter.json", "missing field `gold`");
        assert!(matches!(error, AppError::DataParse { .. }));
        assert_eq!(
            error.to_string(),
            "Malformed medal data in winter.json: missing field `gold`"
        );
    }

    #[test]
    fn test_invalid_year_key_helper() {
        let error = AppError::invalid_year_key("19x2", "summer.json");
        assert!(matches!(error, AppError::InvalidYearKey { .. }));
        assert_eq!(error.to_string(), "Invalid year key '19x2' in summer.json");
    }

    #[test]
    fn test_unknown_year_helper() {
        let error = AppError::unknown_year(1897);
        assert!(matches!(error, AppError::UnknownYear { year: 1897 }));
        assert_eq!(error.to_string(), "No medal data for year 1897");
    }

    #[test]
    fn test_is_data_error() {
        assert!(AppError::data_not_found("x.json").is_data_error());
        assert!(AppError::data_parse("x.json", "bad").is_data_error());
        assert!(AppError::invalid_year_key("abc", "x.json").is_data_error());
        assert!(AppError::unknown_year(1900).is_data_error());

        assert!(!AppError::config_error("bad").is_data_error());
        assert!(!AppError::log_setup_error("bad").is_data_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(!app_error.is_data_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::Json(_)));
        assert!(app_error.is_data_error());
    }
}
