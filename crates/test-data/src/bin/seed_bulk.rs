//! Adds randomly generated users and cases without deleting anything.
//!
//! Run with:
//! ```
//! SEED_USER_COUNT=50 SEED_CASE_COUNT=100 cargo run -p test-data --bin seed-bulk
//! ```
//!
//! Set `SEED_RNG_SEED` for reproducible data.

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use records::{Database, RecordStore};
use test_data::config::{BulkSeedConfig, StoreConfig};
use test_data::db::{BulkSeedSummary, Seeder};
use test_data::generators::{CaseGenerator, UserGenConfig, UserGenerator};
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
    let bulk_config = BulkSeedConfig::from_env()?;

    let db = Database::connect(&store_config.uri, &store_config.database)
        .await
        .with_context(|| format!("connecting to database {}", store_config.database))?;

    tracing::info!("Connected to database {}", db.name());

    let mut rng = match bulk_config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Continue user code numbering after the existing users.
    let existing = db.count_users().await.context("counting users")?;
    let user_gen = UserGenerator::with_config(UserGenConfig {
        code_offset: existing as usize,
        ..Default::default()
    });
    let users = user_gen.generate_batch(bulk_config.user_count, &mut rng);

    let seeder = Seeder::new(&db);
    let mut summary = BulkSeedSummary::default();
    seeder
        .insert_users(&users, &mut summary)
        .await
        .context("seeding users")?;

    if summary.user_ids.is_empty() && bulk_config.case_count > 0 {
        tracing::warn!("No new users were inserted, skipping case generation");
    } else {
        let cases = CaseGenerator::new().generate_batch(
            bulk_config.case_count,
            &summary.user_ids,
            OffsetDateTime::now_utc(),
            &mut rng,
        );
        seeder
            .insert_cases(&cases, &mut summary)
            .await
            .context("seeding cases")?;
    }

    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", summary.user_ids.len());
    tracing::info!("  Users skipped: {}", summary.users_skipped);
    tracing::info!("  Cases: {}", summary.case_ids.len());

    Ok(())
}
