//! # Configuration
//!
//! Settings resolve in one step: defaults → config file. No environment
//! variables are read and the CLI only carries `--view`.
//!
//! Config lives at `~/.daily-todo/config.toml` and is optional. Relative
//! paths inside it are taken from `~/.daily-todo/`; a leading `~/` expands to
//! the home directory.

use log::LevelFilter;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::DEFAULT_FILE_NAME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct DailyTodoConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const CONFIG_DIR_NAME: &str = ".daily-todo";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_FILE_NAME: &str = "daily-todo.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub data_path: PathBuf,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns `~/.daily-todo/config.toml`.
pub fn config_path() -> PathBuf {
    home_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load config from `~/.daily-todo/config.toml`.
pub fn load_config() -> Result<DailyTodoConfig, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`. A missing file yields the defaults; a file that
/// exists but is malformed returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<DailyTodoConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DailyTodoConfig::default());
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the current user's home directory.
pub fn resolve(config: &DailyTodoConfig) -> ResolvedConfig {
    resolve_in(config, &home_dir())
}

/// Resolve with an explicit home directory.
pub fn resolve_in(config: &DailyTodoConfig, home: &Path) -> ResolvedConfig {
    let config_dir = home.join(CONFIG_DIR_NAME);

    let data_path = config
        .storage
        .path
        .as_deref()
        .map(|p| expand_path(p, home, &config_dir))
        .unwrap_or_else(|| home.join(DEFAULT_FILE_NAME));

    let log_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(|p| expand_path(p, home, &config_dir))
        .unwrap_or_else(|| config_dir.join(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        data_path,
        log_level,
        log_file,
    }
}

/// `~/x` → `<home>/x`, absolute stays, anything else hangs off `base`.
fn expand_path(raw: &str, home: &Path, base: &Path) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        return home.join(rest);
    }
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
