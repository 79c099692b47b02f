use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Neither dataset path may be empty
/// - Summer and Winter must point at different files
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    summer_data_path: &str,
    winter_data_path: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if summer_data_path.trim().is_empty() {
        return Err(AppError::config_error("Summer data path cannot be empty"));
    }

    if winter_data_path.trim().is_empty() {
        return Err(AppError::config_error("Winter data path cannot be empty"));
    }

    if summer_data_path == winter_data_path {
        return Err(AppError::config_error(
            "Summer and Winter data paths must point to different files",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_paths() {
        assert!(validate_config("summer.json", "winter.json", &None).is_ok());
    }

    #[test]
    fn test_empty_data_paths_rejected() {
        let err = validate_config("", "winter.json", &None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Summer data path cannot be empty"
        );
        assert!(validate_config("summer.json", "  ", &None).is_err());
    }

    #[test]
    fn test_same_data_path_rejected() {
        assert!(validate_config("medals.json", "medals.json", &None).is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config("s.json", "w.json", &Some(String::new())).is_err());
    }

    #[test]
    fn test_log_parent_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("a").join("b").join("app.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config("s.json", "w.json", &log_path).is_ok());
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
