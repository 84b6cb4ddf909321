use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Host-side settings. The command analyzer itself reads none of these.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub guard: GuardConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GuardConfig {
    /// Tool names whose `command` argument gets analyzed
    pub tools: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuditConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME")
            .map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("git-safety-guard"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Err(ConfigError::ReadError(
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Config file not found"
                )
            ));
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load(),
            Ok(_) | Err(ConfigError::DirectoryNotFound) => Ok(Self::default_config()),
            Err(e) => Err(e),
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        // Validate before saving
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self)?;

        fs::write(&path, contents)?;

        // Set permissions to 600 (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            guard: GuardConfig {
                tools: vec!["bash".to_string()],
            },
            audit: AuditConfig {
                enabled: true,
                path: None,
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.guard.tools.is_empty() {
            return Err(ConfigError::InvalidValue(
                "guard.tools must list at least one tool".to_string()
            ));
        }

        if self.guard.tools.iter().any(|tool| tool.trim().is_empty()) {
            return Err(ConfigError::InvalidValue(
                "guard.tools must not contain empty names".to_string()
            ));
        }

        if let Some(path) = &self.audit.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "audit.path must not be empty".to_string()
                ));
            }
        }

        Ok(())
    }
}
