//! Configuration for the seeding and export tools.
//!
//! Everything is read from the environment once in `main` (after loading a
//! `.env` file) and passed down explicitly. Each loader also takes a plain
//! lookup function so tests can supply values without touching the process
//! environment.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "HiHiTutor";
pub const DEFAULT_EXPORT_PATH: &str = "tests/hihitutor-env.postman_environment.json";
pub const DEFAULT_ENVIRONMENT_ID: &str = "hihitutor-env-id";
pub const DEFAULT_ENVIRONMENT_NAME: &str = "HiHiTutor API Env";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reads `var`, treating blank values as unset.
fn non_blank(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    non_blank(lookup, var)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        })
        .transpose()
}

/// Connection settings for the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// MongoDB connection string (`MONGO_URI`).
    pub uri: String,
    /// Database name (`MONGO_DB`).
    pub database: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let uri = non_blank(&lookup, "MONGO_URI").ok_or(ConfigError::MissingVar("MONGO_URI"))?;
        let database =
            non_blank(&lookup, "MONGO_DB").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self { uri, database })
    }
}

/// Where and under what name the Postman environment is exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Output file (`POSTMAN_ENV_PATH`).
    pub path: PathBuf,
    pub environment_id: String,
    pub environment_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_PATH),
            environment_id: DEFAULT_ENVIRONMENT_ID.to_string(),
            environment_name: DEFAULT_ENVIRONMENT_NAME.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = non_blank(&lookup, "POSTMAN_ENV_PATH") {
            config.path = PathBuf::from(path);
        }
        config
    }

    /// Same settings, writing to `path`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Volume settings for bulk seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSeedConfig {
    /// Number of users to generate (`SEED_USER_COUNT`).
    pub user_count: usize,
    /// Number of cases to generate (`SEED_CASE_COUNT`).
    pub case_count: usize,
    /// Fixed RNG seed for reproducible data (`SEED_RNG_SEED`).
    pub rng_seed: Option<u64>,
}

impl Default for BulkSeedConfig {
    fn default() -> Self {
        Self {
            user_count: 20,
            case_count: 20,
            rng_seed: None,
        }
    }
}

impl BulkSeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            user_count: parse_number(&lookup, "SEED_USER_COUNT")?.unwrap_or(defaults.user_count),
            case_count: parse_number(&lookup, "SEED_CASE_COUNT")?.unwrap_or(defaults.case_count),
            rng_seed: parse_number(&lookup, "SEED_RNG_SEED")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_store_config_defaults_database() {
        let config = StoreConfig::from_lookup(lookup_from(&[("MONGO_URI", "mongodb://db:27017")]))
            .unwrap();

        assert_eq!(config.uri, "mongodb://db:27017");
        assert_eq!(config.database, "HiHiTutor");
    }

    #[test]
    fn test_store_config_requires_uri() {
        assert_eq!(
            StoreConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingVar("MONGO_URI"))
        );
        assert_eq!(
            StoreConfig::from_lookup(lookup_from(&[("MONGO_URI", "   ")])),
            Err(ConfigError::MissingVar("MONGO_URI"))
        );
    }

    #[test]
    fn test_store_config_database_override() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("MONGO_DB", "Staging"),
        ]))
        .unwrap();

        assert_eq!(config.database, "Staging");
    }

    #[test]
    fn test_export_config() {
        let default = ExportConfig::from_lookup(lookup_from(&[]));
        assert_eq!(
            default.path,
            PathBuf::from("tests/hihitutor-env.postman_environment.json")
        );
        assert_eq!(default.environment_id, "hihitutor-env-id");
        assert_eq!(default.environment_name, "HiHiTutor API Env");

        let custom = ExportConfig::from_lookup(lookup_from(&[("POSTMAN_ENV_PATH", "out/env.json")]));
        assert_eq!(custom.path, PathBuf::from("out/env.json"));
    }

    #[test]
    fn test_bulk_seed_config() {
        assert_eq!(
            BulkSeedConfig::from_lookup(lookup_from(&[])).unwrap(),
            BulkSeedConfig::default()
        );

        let config = BulkSeedConfig::from_lookup(lookup_from(&[
            ("SEED_USER_COUNT", "5"),
            ("SEED_CASE_COUNT", "0"),
            ("SEED_RNG_SEED", "12345"),
        ]))
        .unwrap();
        assert_eq!(config.user_count, 5);
        assert_eq!(config.case_count, 0);
        assert_eq!(config.rng_seed, Some(12345));
    }

    #[test]
    fn test_bulk_seed_config_rejects_garbage() {
        assert_eq!(
            BulkSeedConfig::from_lookup(lookup_from(&[("SEED_USER_COUNT", "many")])),
            Err(ConfigError::InvalidNumber {
                var: "SEED_USER_COUNT",
                value: "many".to_string(),
            })
        );
    }
}
