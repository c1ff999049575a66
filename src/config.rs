use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::board::{GroupingOption, SortOption};
use crate::error::{AppError, AppResult};

const CONFIG_DIR_NAME: &str = "tix";
const CONFIG_FILE_NAME: &str = "config.json";

/// Endpoint used when no source is stored.
pub const DEFAULT_SOURCE_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            AppError::Configuration("could not determine user config directory".to_string())
        })
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

/// On-disk configuration, everything optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    pub source_url: Option<String>,
    pub default_grouping: Option<String>,
    pub default_ordering: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        let path = config_file_path()?;
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| AppError::Configuration(format!("invalid config file: {err}"))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let path = config_file_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(&path, data)?;
        Ok(())
    }
}

/// Resolved configuration with defaults applied: group by status, order by
/// priority, fetch from the default endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_url: String,
    pub default_grouping: GroupingOption,
    pub default_ordering: SortOption,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        let stored = StoredConfig::load()?;
        Self::from_stored(&stored)
    }

    pub fn from_stored(stored: &StoredConfig) -> AppResult<Self> {
        let source_url = stored
            .source_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

        let default_grouping = match &stored.default_grouping {
            Some(value) => GroupingOption::from_str(value).ok_or_else(|| {
                AppError::Configuration(format!("invalid default grouping '{value}'"))
            })?,
            None => GroupingOption::Status,
        };

        let default_ordering = match &stored.default_ordering {
            Some(value) => SortOption::from_str(value).ok_or_else(|| {
                AppError::Configuration(format!("invalid default ordering '{value}'"))
            })?,
            None => SortOption::Priority,
        };

        Ok(Self {
            source_url,
            default_grouping,
            default_ordering,
        })
    }
}
