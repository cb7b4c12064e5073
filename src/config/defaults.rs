use super::{Config, GitConfig, SweepConfig};

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        sweep: default_sweep_config(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        remote: "origin".to_string(),
        default_base: "main".to_string(),
    }
}

pub fn default_sweep_config() -> SweepConfig {
    SweepConfig {
        default_stale_days: 120,
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "git-sweep") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        std::env::home_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("git-sweep")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("GIT_SWEEP_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = default_config();
        assert_eq!(config.git.remote, "origin");
        assert_eq!(config.git.default_base, "main");
        assert_eq!(config.sweep.default_stale_days, 120);
    }

    #[test]
    fn test_config_paths() {
        let config_file = get_config_file_path();
        assert!(config_file.ends_with("config.json"));
        assert!(config_file.parent().is_some());
    }
}
