//! Looks up the well-known test records and exports their ids.

use std::path::PathBuf;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{info, warn};

use records::{ObjectId, RecordStore, StoreError};

use super::environment::PostmanEnvironment;
use super::keys::{ExportKey, Lookup};
use crate::config::ExportConfig;

/// Placeholder printed for a key whose lookup found nothing.
pub const NO_RESULT: &str = "<no result>";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Lookup failed: {0}")]
    Lookup(#[from] StoreError),
    #[error("No matching record for {}", join_keys(.0))]
    MissingRecords(Vec<ExportKey>),
    #[error("Failed to serialize environment: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_keys(keys: &[ExportKey]) -> String {
    keys.iter()
        .map(ExportKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of the five lookups, in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResults {
    entries: Vec<(ExportKey, Option<ObjectId>)>,
}

impl LookupResults {
    pub fn new(entries: Vec<(ExportKey, Option<ObjectId>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(ExportKey, Option<ObjectId>)] {
        &self.entries
    }

    pub fn get(&self, key: ExportKey) -> Option<ObjectId> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, id)| *id)
    }

    /// Keys whose lookup found no record.
    pub fn missing(&self) -> Vec<ExportKey> {
        self.entries
            .iter()
            .filter(|(_, id)| id.is_none())
            .map(|(key, _)| *key)
            .collect()
    }

    /// `key=<hex id>` per key, or `key=<no result>`.
    pub fn summary_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, id)| match id {
                Some(id) => format!("{key}={id}"),
                None => format!("{key}={NO_RESULT}"),
            })
            .collect()
    }

    /// Builds the environment document. Fails listing every missing key if
    /// any lookup found nothing.
    pub fn to_environment(
        &self,
        config: &ExportConfig,
        exported_at: OffsetDateTime,
    ) -> Result<PostmanEnvironment, ExportError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ExportError::MissingRecords(missing));
        }

        let mut env = PostmanEnvironment::new(config, exported_at);
        for (key, id) in &self.entries {
            if let Some(id) = id {
                env.push(key.as_str(), id.to_hex());
            }
        }
        Ok(env)
    }
}

/// What a successful export produced.
#[derive(Debug)]
pub struct ExportOutcome {
    pub results: LookupResults,
    pub environment: PostmanEnvironment,
    pub path: PathBuf,
}

/// Exports the ids of the well-known test records to a Postman environment.
pub struct IdentifierExporter<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    config: ExportConfig,
}

impl<'a, S: RecordStore + ?Sized> IdentifierExporter<'a, S> {
    pub fn new(store: &'a S, config: ExportConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Finds the first matching record for every key.
    pub async fn lookup(&self) -> Result<LookupResults, ExportError> {
        let mut entries = Vec::with_capacity(ExportKey::ALL.len());

        for key in ExportKey::ALL {
            let lookup = key.lookup();
            let id = match &lookup {
                Lookup::User(user) => self.store.find_user(user).await?.map(|u| u.id),
                Lookup::Case(case) => self.store.find_case(case).await?.map(|c| c.id),
            };

            match id {
                Some(id) => info!("{key}: {id} ({lookup})"),
                None => warn!("{key}: no record matches {lookup}"),
            }
            entries.push((key, id));
        }

        Ok(LookupResults::new(entries))
    }

    /// Writes an already looked-up result set to the configured path.
    ///
    /// Nothing is written when a key is missing.
    pub async fn write(
        &self,
        results: LookupResults,
        exported_at: OffsetDateTime,
    ) -> Result<ExportOutcome, ExportError> {
        let environment = results.to_environment(&self.config, exported_at)?;
        environment.write_to(&self.config.path).await?;

        info!("Exported environment to {}", self.config.path.display());
        Ok(ExportOutcome {
            results,
            environment,
            path: self.config.path.clone(),
        })
    }

    /// Looks up every key and writes the environment file.
    pub async fn export(&self, exported_at: OffsetDateTime) -> Result<ExportOutcome, ExportError> {
        let results = self.lookup().await?;
        self.write(results, exported_at).await
    }
}
