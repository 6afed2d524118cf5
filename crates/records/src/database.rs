use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use mongodb::{Client, Collection};
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{CASES, CaseRecord, NewCase, NewUser, USERS, UserRecord};
use crate::query_builder::{CaseLookup, UserLookup};

/// Storage for the `users` and `cases` collections.
///
/// Lookups return the first match in the store's natural order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_user(&self, lookup: &UserLookup) -> Result<Option<UserRecord>, StoreError>;

    async fn find_case(&self, lookup: &CaseLookup) -> Result<Option<CaseRecord>, StoreError>;

    async fn insert_user(&self, user: &NewUser) -> Result<ObjectId, StoreError>;

    async fn insert_case(&self, case: &NewCase) -> Result<ObjectId, StoreError>;

    /// Deletes every user. Returns the number removed.
    async fn clear_users(&self) -> Result<u64, StoreError>;

    /// Deletes every case. Returns the number removed.
    async fn clear_cases(&self) -> Result<u64, StoreError>;

    async fn count_users(&self) -> Result<u64, StoreError>;

    async fn count_cases(&self) -> Result<u64, StoreError>;
}

/// MongoDB-backed record store.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    pub fn new(db: mongodb::Database) -> Self {
        Self { db }
    }

    /// Opens a client for `uri`, selects `name` and pings it so a bad
    /// connection string fails here instead of on the first query.
    pub async fn connect(uri: &str, name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(StoreError::Connect)?;
        let db = client.database(name);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self::new(db))
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    /// Drops the whole database. Used by integration tests.
    pub async fn drop_database(&self) -> Result<(), StoreError> {
        self.db.drop().await?;
        Ok(())
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection::<T>(name)
    }
}

fn inserted_object_id(id: Bson) -> Result<ObjectId, StoreError> {
    match id {
        Bson::ObjectId(oid) => Ok(oid),
        other => Err(StoreError::UnexpectedId(other.to_string())),
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn find_user(&self, lookup: &UserLookup) -> Result<Option<UserRecord>, StoreError> {
        let user = self
            .collection::<UserRecord>(USERS)
            .find_one(lookup.filter())
            .await?;

        Ok(user)
    }

    async fn find_case(&self, lookup: &CaseLookup) -> Result<Option<CaseRecord>, StoreError> {
        let case = self
            .collection::<CaseRecord>(CASES)
            .find_one(lookup.filter())
            .await?;

        Ok(case)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<ObjectId, StoreError> {
        let result = self.collection::<NewUser>(USERS).insert_one(user).await?;
        let id = inserted_object_id(result.inserted_id)?;

        debug!("Inserted user {} ({})", id, user.email);
        Ok(id)
    }

    async fn insert_case(&self, case: &NewCase) -> Result<ObjectId, StoreError> {
        let result = self.collection::<NewCase>(CASES).insert_one(case).await?;
        let id = inserted_object_id(result.inserted_id)?;

        debug!("Inserted case {} ({})", id, case.title);
        Ok(id)
    }

    async fn clear_users(&self) -> Result<u64, StoreError> {
        let result = self
            .collection::<Document>(USERS)
            .delete_many(doc! {})
            .await?;

        Ok(result.deleted_count)
    }

    async fn clear_cases(&self) -> Result<u64, StoreError> {
        let result = self
            .collection::<Document>(CASES)
            .delete_many(doc! {})
            .await?;

        Ok(result.deleted_count)
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        let count = self
            .collection::<Document>(USERS)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }

    async fn count_cases(&self) -> Result<u64, StoreError> {
        let count = self
            .collection::<Document>(CASES)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }
}
