use std::path::{Path, PathBuf};

fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("nfl_season_games")
}

/// Returns the platform-specific path for the config file.
///
/// Falls back to the current directory if no config directory is available.
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_directory() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        assert!(config_path.ends_with("config.toml"));
        assert!(config_path.contains("nfl_season_games"));
        assert!(log_dir.contains("nfl_season_games"));
        assert!(log_dir.ends_with("logs"));
    }
}
