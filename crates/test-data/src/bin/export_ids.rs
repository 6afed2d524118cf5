//! Exports the ids of the well-known test records to a Postman environment.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin export-ids
//! ```
//!
//! Writes `tests/hihitutor-env.postman_environment.json` unless
//! `POSTMAN_ENV_PATH` says otherwise. If any record is missing, nothing is
//! written and the process exits with an error.

use anyhow::Context;
use records::Database;
use test_data::config::{ExportConfig, StoreConfig};
use test_data::export::IdentifierExporter;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store_config = StoreConfig::from_env()?;
    let db = Database::connect(&store_config.uri, &store_config.database)
        .await
        .with_context(|| format!("connecting to database {}", store_config.database))?;

    tracing::info!("Connected to database {}", db.name());

    let exporter = IdentifierExporter::new(&db, ExportConfig::from_env());
    let results = exporter.lookup().await.context("looking up records")?;

    for line in results.summary_lines() {
        println!("{line}");
    }

    let outcome = exporter
        .write(results, OffsetDateTime::now_utc())
        .await
        .context("exporting environment")?;

    println!("Exported environment to {}", outcome.path.display());
    Ok(())
}
