use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::filter::StatusFilter;
use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
const API_URL_ENV: &str = "TIX_API_URL";
const CONFIG_DIR_NAME: &str = "tix";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_status: StatusFilter,
}

/// On-disk configuration as edited by `tix config init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub api_base_url: Option<String>,
    pub default_status: Option<String>,
}

impl AppConfig {
    /// Precedence: command-line flag, `TIX_API_URL`, config file, default.
    pub fn load(api_url_override: Option<String>) -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Self::resolve(api_url_override, env::var(API_URL_ENV).ok(), stored)
    }

    fn resolve(
        flag: Option<String>,
        environment: Option<String>,
        stored: StoredConfig,
    ) -> AppResult<Self> {
        let api_base_url = [flag, environment, stored.api_base_url]
            .into_iter()
            .flatten()
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "API base URL must start with http:// or https://, got '{api_base_url}'"
            )));
        }

        let default_status = match stored.default_status.as_deref() {
            None | Some("") => StatusFilter::default(),
            Some(value) => StatusFilter::from_str(value).ok_or_else(|| {
                AppError::Configuration(format!(
                    "unknown default status '{value}' (expected all, open, or completed)"
                ))
            })?,
        };

        Ok(Self {
            api_base_url,
            default_status,
        })
    }
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("unable to determine the user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}
