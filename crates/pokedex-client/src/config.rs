use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base URL of the public catalog API
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Number of entries `--random` draws from.
///
/// Bump this together with [`CATALOG_SIZE_REVISION`] whenever the upstream
/// catalog publishes a new generation. Deployments that run ahead of a release
/// override it with `catalog_size` in the config file or `POKEDEX_CATALOG_SIZE`.
pub const DEFAULT_CATALOG_SIZE: u32 = 1025;

/// Catalog generation [`DEFAULT_CATALOG_SIZE`] was last checked against
pub const CATALOG_SIZE_REVISION: &str = "generation-ix";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_CONFIG_PATH: &str = "POKEDEX_CONFIG";
const ENV_API_BASE: &str = "POKEDEX_API_BASE";
const ENV_CATALOG_SIZE: &str = "POKEDEX_CATALOG_SIZE";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POKEDEX_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.pokedex/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("pokedex").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pokedex").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub catalog_size: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            catalog_size: DEFAULT_CATALOG_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from the resolved path, then apply environment overrides.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(explicit_path)?;
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `POKEDEX_API_BASE` and `POKEDEX_CATALOG_SIZE` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            self.api_base = base.trim().to_string();
        }

        if let Some(size) = lookup(ENV_CATALOG_SIZE).filter(|v| !v.trim().is_empty()) {
            self.catalog_size = size.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_CATALOG_SIZE, size
                ))
            })?;
        }

        Ok(())
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog_size == 0 {
            return Err(Error::Config("catalog_size must be at least 1".to_string()));
        }
        if self.api_base.trim().is_empty() {
            return Err(Error::Config("api_base must not be empty".to_string()));
        }
        Ok(())
    }

    /// Endpoint template root with any trailing slash removed
    pub fn endpoint_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
