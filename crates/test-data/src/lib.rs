//! Test data for HiHiTutor API testing.
//!
//! This crate seeds the `users` and `cases` collections and exports the ids
//! of well-known records to a Postman environment, so API collections can be
//! run against a freshly seeded database.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let config = StoreConfig::from_env()?;
//! let db = Database::connect(&config.uri, &config.database).await?;
//!
//! let ids = Seeder::new(&db).seed_sample(OffsetDateTime::now_utc()).await?;
//! let outcome = IdentifierExporter::new(&db, ExportConfig::from_env())
//!     .export(OffsetDateTime::now_utc())
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod export;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BulkSeedConfig, ConfigError, ExportConfig, StoreConfig};
    pub use crate::db::{BulkSeedSummary, SampleIds, SeedError, Seeder};
    pub use crate::export::{
        ExportError, ExportKey, ExportOutcome, IdentifierExporter, LookupResults,
        PostmanEnvironment,
    };
    pub use crate::generators::{CaseGenerator, UserGenerator, sample_cases, sample_users};
    pub use records::{Database, MemoryStore, RecordStore};
    pub use time::OffsetDateTime;
}
