//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SHORTLIST_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::constants::DEFAULT_SEARCH_K;
use crate::index::IndexBackend;

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SHORTLIST_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the static catalog JSON file. Default: `./assessments.json`.
    pub catalog_path: PathBuf,

    /// Which similarity index variant to build. Default: `vector`.
    pub backend: IndexBackend,

    /// Directory holding the sentence-encoder model files (safetensors +
    /// tokenizer). Required for the vector backend.
    pub model_dir: Option<PathBuf>,

    /// Candidates requested from the index before filtering. Default: `50`.
    pub search_k: usize,

    /// Max entries in the result cache; `0` disables it. Default: `1024`.
    pub cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./assessments.json"),
            backend: IndexBackend::Vector,
            model_dir: None,
            search_k: DEFAULT_SEARCH_K,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    const ENV_CATALOG_PATH: &'static str = "SHORTLIST_CATALOG_PATH";
    const ENV_BACKEND: &'static str = "SHORTLIST_BACKEND";
    const ENV_MODEL_DIR: &'static str = "SHORTLIST_MODEL_DIR";
    const ENV_SEARCH_K: &'static str = "SHORTLIST_SEARCH_K";
    const ENV_CACHE_CAPACITY: &'static str = "SHORTLIST_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path =
            Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let backend = Self::parse_backend_from_env(defaults.backend)?;
        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let search_k = Self::parse_search_k_from_env(defaults.search_k)?;
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);

        Ok(Self {
            catalog_path,
            backend,
            model_dir,
            search_k,
            cache_capacity,
        })
    }

    /// Validates paths and basic invariants (does not create or read files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_path.exists() && !self.catalog_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.catalog_path.clone(),
            });
        }

        match &self.model_dir {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::PathNotFound { path: path.clone() });
                }
                if !path.is_dir() {
                    return Err(ConfigError::NotADirectory { path: path.clone() });
                }
            }
            None => {
                if self.backend == IndexBackend::Vector {
                    return Err(ConfigError::MissingModelDir {
                        var: Self::ENV_MODEL_DIR,
                    });
                }
            }
        }

        Ok(())
    }

    fn parse_backend_from_env(default: IndexBackend) -> Result<IndexBackend, ConfigError> {
        match env::var(Self::ENV_BACKEND) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBackend { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_search_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_SEARCH_K) {
            Ok(value) => {
                let k: usize = value.parse().map_err(|e| ConfigError::SearchKParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if k == 0 {
                    return Err(ConfigError::InvalidSearchK { value });
                }

                Ok(k)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
