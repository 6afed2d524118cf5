//! In-process record store.
//!
//! Records go through the same BSON encoding as the MongoDB store, so a
//! field-name mismatch between the insert and read models shows up here too.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::{self, Document, oid::ObjectId};
use serde::{Serialize, de::DeserializeOwned};

use crate::database::RecordStore;
use crate::errors::StoreError;
use crate::models::{CaseRecord, NewCase, NewUser, UserRecord};
use crate::query_builder::{CaseLookup, UserLookup};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<UserRecord>,
    cases: Vec<CaseRecord>,
}

/// Record store holding both collections in memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    pub fn cases(&self) -> Vec<CaseRecord> {
        self.lock().cases.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Encodes `value`, assigns a fresh `_id` and decodes it as the read model.
fn assign_id<N: Serialize, R: DeserializeOwned>(value: &N) -> Result<(ObjectId, R), StoreError> {
    let id = ObjectId::new();
    let mut document: Document = bson::to_document(value)?;
    document.insert("_id", id);

    Ok((id, bson::from_document(document)?))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_user(&self, lookup: &UserLookup) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.lock().users.iter().find(|u| lookup.matches(u)).cloned())
    }

    async fn find_case(&self, lookup: &CaseLookup) -> Result<Option<CaseRecord>, StoreError> {
        Ok(self.lock().cases.iter().find(|c| lookup.matches(c)).cloned())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<ObjectId, StoreError> {
        let (id, record) = assign_id(user)?;
        self.lock().users.push(record);
        Ok(id)
    }

    async fn insert_case(&self, case: &NewCase) -> Result<ObjectId, StoreError> {
        let (id, record) = assign_id(case)?;
        self.lock().cases.push(record);
        Ok(id)
    }

    async fn clear_users(&self) -> Result<u64, StoreError> {
        let removed = std::mem::take(&mut self.lock().users);
        Ok(removed.len() as u64)
    }

    async fn clear_cases(&self) -> Result<u64, StoreError> {
        let removed = std::mem::take(&mut self.lock().cases);
        Ok(removed.len() as u64)
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        Ok(self.lock().users.len() as u64)
    }

    async fn count_cases(&self) -> Result<u64, StoreError> {
        Ok(self.lock().cases.len() as u64)
    }
}
