use crate::domain::model::PointsScheme;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RankingsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "contest-results.jsonl";

/// Settings loaded from an optional TOML file.
///
/// ```toml
/// [store]
/// path = "${HOME}/.rankings/contest-results.jsonl"
///
/// [points]
/// win = 3
/// draw = 1
/// loss = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RankingsConfig {
    pub store: StoreConfig,
    pub points: PointsScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

impl RankingsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RankingsError::ConfigError {
                message: format!("Failed to read config file '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RankingsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RankingsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line override for the store location.
    pub fn with_store_path(mut self, path: impl Into<String>) -> Self {
        self.store.path = path.into();
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("store.path", &self.store.path)?;
        validation::validate_points("points", &self.points)?;
        Ok(())
    }
}

impl Validate for RankingsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for RankingsConfig {
    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn points(&self) -> PointsScheme {
        self.points
    }
}
