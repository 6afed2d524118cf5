//! Typed access to the HiHiTutor `users` and `cases` collections.
//!
//! [`database::Database`] talks to MongoDB; [`memory::MemoryStore`] keeps the
//! same collections in process for tests. Both implement
//! [`database::RecordStore`].

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod query_builder;

pub use mongodb::bson;
pub use mongodb::bson::oid::ObjectId;

pub use database::{Database, RecordStore};
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{CaseRecord, NewCase, NewUser, PostType, UserRecord, UserType};
pub use query_builder::{CaseLookup, UserLookup};
