use std::path::{Path, PathBuf};

fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("olympic_medals")
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir()
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_file_name() {
        let path = get_config_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.contains("olympic_medals"));
    }

    #[test]
    fn test_log_dir_is_sibling_of_config() {
        let config = PathBuf::from(get_config_path());
        let logs = PathBuf::from(get_log_dir_path());
        assert_eq!(config.parent(), logs.parent());
    }
}
