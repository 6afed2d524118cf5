//! Database integration for seeding test data.
//!
//! The [`Seeder`] resets the store to the fixed sample state or inserts
//! generated records on top of what is already there.

mod seeder;

pub use seeder::{BulkSeedSummary, ResetSummary, SampleIds, SeedError, Seeder};
