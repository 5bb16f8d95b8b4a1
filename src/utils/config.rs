// src/utils/config.rs

use crate::api::config::{DEFAULT_CODE_MODEL, DEFAULT_IMAGE_MODEL};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub log_level: String,
    pub output_directory: String,
    pub archive_name: String,
    pub code_model: String,
    pub image_model: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            log_level: "off".to_string(),
            output_directory: "./".to_string(),
            archive_name: "full-stack-buddy-app.zip".to_string(),
            code_model: DEFAULT_CODE_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Where the archive for a run is written.
    pub fn archive_path(&self) -> PathBuf {
        Path::new(&self.output_directory).join(&self.archive_name)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, with the environment taking precedence over the file.
    pub fn resolve_api_key(&self) -> Option<String> {
        API_KEY_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }
}

pub fn get_config_path() -> PathBuf {
    let mut path = get_executable_dir();
    path.push("config.toml");
    path
}

/// Validate config to prevent obviously wrong or missing values.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.timeout_secs == 0 {
        return Err(AppError::InvalidInput(
            "Timeout cannot be zero".to_string(),
        ));
    }
    if !config.archive_name.ends_with(".zip") {
        return Err(AppError::InvalidInput(format!(
            "Archive name must end in .zip: {}",
            config.archive_name
        )));
    }
    if config.code_model.is_empty() || config.image_model.is_empty() {
        return Err(AppError::InvalidInput(
            "Model names cannot be empty".to_string(),
        ));
    }
    if !Path::new(&config.output_directory).is_dir() {
        return Err(AppError::InvalidInput(format!(
            "Output directory does not exist: {}",
            config.output_directory
        )));
    }
    Ok(())
}

/// Read config from file, and create a default config if none exists.
pub fn read_config() -> Result<Config, AppError> {
    read_config_from(&get_config_path())
}

pub fn write_config(config: &Config) -> Result<(), AppError> {
    write_config_to(config, &get_config_path())
}

fn read_config_from(config_path: &Path) -> Result<Config, AppError> {
    if !config_path.exists() {
        write_config_to(&Config::default(), config_path)?;
    }
    let config_str = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate_config(&config)?;
    Ok(config)
}

fn write_config_to(config: &Config, config_path: &Path) -> Result<(), AppError> {
    let config_str = toml::to_string(config)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize config: {}", e)))?;
    fs::write(config_path, config_str)?;
    Ok(())
}

fn get_executable_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = read_config_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_written_config_is_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            log_level: "debug".to_string(),
            archive_name: "todo.zip".to_string(),
            timeout_secs: 30,
            output_directory: dir.path().display().to_string(),
            ..Config::default()
        };

        write_config_to(&config, &path).unwrap();
        assert_eq!(read_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_timeout = Config { timeout_secs: 0, ..Config::default() };
        assert!(validate_config(&zero_timeout).is_err());

        let tarball = Config { archive_name: "app.tar".to_string(), ..Config::default() };
        assert!(validate_config(&tarball).is_err());

        let missing_dir = Config {
            output_directory: "/definitely/not/here".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&missing_dir).is_err());
    }

    #[test]
    fn test_archive_path_joins_output_directory() {
        let config = Config {
            output_directory: "out".to_string(),
            ..Config::default()
        };
        assert_eq!(config.archive_path(), Path::new("out/full-stack-buddy-app.zip"));
    }
}
