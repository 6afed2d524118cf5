//! Postman environment documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::debug;

use super::exporter::ExportError;
use crate::config::ExportConfig;

const VARIABLE_SCOPE: &str = "environment";
const EXPORTED_USING: &str = "Postman";

/// One `{key, value, enabled}` entry of an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentValue {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

/// A Postman environment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanEnvironment {
    pub id: String,
    pub name: String,
    pub values: Vec<EnvironmentValue>,
    pub timestamp: i64,
    #[serde(rename = "_postman_variable_scope")]
    pub variable_scope: String,
    #[serde(rename = "_postman_exported_at")]
    pub exported_at: String,
    #[serde(rename = "_postman_exported_using")]
    pub exported_using: String,
}

/// Formats `at` the way Postman stamps exports: UTC with milliseconds.
pub fn format_exported_at(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let utc = at.to_offset(time::UtcOffset::UTC);

    // The description only has numeric components, which always format.
    utc.format(format).unwrap_or_else(|_| utc.to_string())
}

impl PostmanEnvironment {
    pub fn new(config: &ExportConfig, exported_at: OffsetDateTime) -> Self {
        Self {
            id: config.environment_id.clone(),
            name: config.environment_name.clone(),
            values: Vec::new(),
            timestamp: 0,
            variable_scope: VARIABLE_SCOPE.to_string(),
            exported_at: format_exported_at(exported_at),
            exported_using: EXPORTED_USING.to_string(),
        }
    }

    /// Appends an enabled variable.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push(EnvironmentValue {
            key: key.into(),
            value: value.into(),
            enabled: true,
        });
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, ExportError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Replaces the file at `path`, creating missing parent directories.
    ///
    /// The document is written to a sibling temporary file first and renamed
    /// into place, so the target is never left half-written.
    pub async fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ExportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp = temp_path(path);
        if let Err(source) = tokio::fs::write(&tmp, json.as_bytes()).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(ExportError::Io { path: tmp, source });
        }
        if let Err(source) = tokio::fs::rename(&tmp, path).await {
            tokio::fs::remove_file(&tmp).await.ok();
            return Err(ExportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
