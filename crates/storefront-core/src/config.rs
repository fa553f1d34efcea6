//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `storefront.toml` +
//! `storefront.<env>.toml` + `STOREFRONT_*` env vars (`__` separates nested
//! keys, e.g. `STOREFRONT_SEARCH__WEIGHTS__NAME=60`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::ScoringWeights;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub weights: ScoringWeights,
    /// Name of the location query parameter mirroring the search string.
    pub query_param: String,
    /// Quiet period applied to typed input; 0 recomputes on every keystroke.
    pub debounce_ms: u64,
    pub detail_url_prefix: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            query_param: "q".to_string(),
            debounce_ms: 0,
            detail_url_prefix: "/productos".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: "catalog.json".to_string() }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("storefront.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("storefront.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("storefront.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("storefront.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("STOREFRONT_").split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Catalog location with `~` and env vars expanded.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        Ok(expand_path(self.settings()?.catalog.path))
    }

    fn validate(&self) -> Result<()> {
        let settings = self.settings()?;
        if settings.search.query_param.trim().is_empty() {
            return Err(Error::InvalidConfig("search.query_param must not be empty".to_string()));
        }
        if settings.search.weights.is_all_zero() {
            return Err(Error::InvalidConfig(
                "search.weights are all zero; nothing could ever match".to_string(),
            ));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
