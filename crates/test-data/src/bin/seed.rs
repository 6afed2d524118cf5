//! Resets `users` and `cases` to the fixed sample records.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! Prints the generated ids as `key=value` lines on stdout.

use anyhow::Context;
use records::Database;
use test_data::config::StoreConfig;
use test_data::db::Seeder;
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

    let config = StoreConfig::from_env()?;
    let db = Database::connect(&config.uri, &config.database)
        .await
        .with_context(|| format!("connecting to database {}", config.database))?;

    tracing::info!("Connected to database {}", db.name());

    let ids = Seeder::new(&db)
        .seed_sample(OffsetDateTime::now_utc())
        .await
        .context("seeding sample data")?;

    tracing::info!("Seed completed!");
    for line in ids.lines() {
        println!("{line}");
    }

    Ok(())
}
