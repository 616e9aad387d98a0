//! Configuration types.
//!
//! Every setting has a default, so a missing file or a missing section is
//! never an error. Values are read from TOML:
//!
//! ```toml
//! [catalog]
//! path = "recipes_updated.json"
//!
//! [browse]
//! default_max_time = 20
//! debounce_ms = 300
//! sort = "ascending"
//!
//! [media]
//! bundle_dir = "zips"
//! ```

use crate::catalog::DEFAULT_CATALOG_FILE;
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::ConfigError;
use crate::query::{DEFAULT_MAX_TIME, QueryState, SortOrder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Initial query settings and input rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Time threshold of a fresh or cleared query, in minutes.
    #[serde(default = "default_max_time")]
    pub default_max_time: u32,

    /// Quiet interval before a search recompute, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub sort: SortOrder,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_max_time: default_max_time(),
            debounce_ms: default_debounce_ms(),
            sort: SortOrder::default(),
        }
    }
}

impl BrowseConfig {
    /// The query a session starts with and returns to when cleared.
    pub fn baseline_query(&self) -> QueryState {
        QueryState {
            sort: self.sort,
            ..QueryState::new(self.default_max_time)
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Where downloadable recipe bundles live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_bundle_dir")]
    pub bundle_dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            bundle_dir: default_bundle_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the config at `path`, falling back to defaults when no path is
    /// given or the file cannot be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::from_file(path).unwrap_or_else(|e| {
            warn!("{}; using default configuration", e);
            Self::default()
        })
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

fn default_max_time() -> u32 {
    DEFAULT_MAX_TIME
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_bundle_dir() -> PathBuf {
    PathBuf::from("zips")
}
