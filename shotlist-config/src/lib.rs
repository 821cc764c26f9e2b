use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use shotlist_compose::DEFAULT_BRAND_TEXT;
use thiserror::Error;
use tracing::debug;

mod catalog;

pub use catalog::{Catalog, NO_PRESET, SettingsSuggestion};

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const CONFIG_DIR_NAME: &str = ".shotlist";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    ConfigDirUnavailable,
    #[error("failed to read or write configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to deserialize configuration: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("option list `{0}` must not be empty")]
    EmptyOptionList(&'static str),
    #[error("preset name `{0}` is reserved for skipping presets")]
    ReservedPresetName(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: String,
    pub brand_text: String,
    pub catalog: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            brand_text: DEFAULT_BRAND_TEXT.to_string(),
            catalog: Catalog::default(),
        }
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub config: Config,
    pub path: PathBuf,
    pub created: bool,
}

/// Loads the shotlist configuration from `~/.shotlist/config.toml`, creating it if absent.
pub fn load_or_init() -> Result<LoadOutcome, ConfigError> {
    let path = config_file_path()?;
    load_or_init_at(&path)
}

/// Loads the configuration at `path`, writing the defaults there when the file is missing.
pub fn load_or_init_at(path: &Path) -> Result<LoadOutcome, ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.catalog.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(LoadOutcome {
            config,
            path: path.to_path_buf(),
            created: false,
        })
    } else {
        let config = Config::default();
        save(&config, path)?;
        debug!(path = %path.display(), "wrote default configuration");
        Ok(LoadOutcome {
            config,
            path: path.to_path_buf(),
            created: true,
        })
    }
}

/// Persist the given configuration to disk at the provided path.
pub fn save(config: &Config, path: &Path) -> Result<(), ConfigError> {
    ensure_parent_exists(path)?;
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn ensure_parent_exists(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(base_dirs
        .home_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}
