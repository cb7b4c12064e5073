use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub git: GitConfig,
    pub sweep: SweepConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GitConfig {
    pub remote: String,
    pub default_base: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SweepConfig {
    pub default_stale_days: u32,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        ConfigManager::load_or_create()
    }

    pub fn validate(&self) -> Result<()> {
        if self.git.remote.is_empty() {
            return Err(ConfigError::Validation(
                "Remote name cannot be empty".to_string(),
            ));
        }
        if self.git.remote.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "Remote name cannot contain whitespace".to_string(),
            ));
        }
        if self.git.default_base.is_empty() {
            return Err(ConfigError::Validation(
                "Default base branch cannot be empty".to_string(),
            ));
        }
        if self.sweep.default_stale_days == 0 {
            return Err(ConfigError::Validation(
                "Default staleness threshold must be at least one day".to_string(),
            ));
        }
        Ok(())
    }
}
