use crate::listing::DEFAULT_TIME_COLUMNS;
use crate::time::{TimeFormatter, UnrecognizedPolicy};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub setlist: SetlistConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub unrecognized: UnrecognizedPolicy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingConfig {
    pub time_columns: Vec<String>,
    #[serde(default = "default_sort_column")]
    pub sort_column: String,
}

fn default_sort_column() -> String {
    "Start Time".to_string()
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            time_columns: DEFAULT_TIME_COLUMNS.iter().map(|c| c.to_string()).collect(),
            sort_column: default_sort_column(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetlistConfig {
    pub max_length_seconds: u32,
}

impl Default for SetlistConfig {
    fn default() -> Self {
        // One hour
        Self { max_length_seconds: 3600 }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn formatter(&self) -> TimeFormatter {
        TimeFormatter::new(self.display.unrecognized)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "showtime", "showtime")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
