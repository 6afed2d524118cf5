//! Database seeding utilities.

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{info, warn};

use records::{NewCase, NewUser, ObjectId, RecordStore, StoreError, UserLookup};

use crate::export::ExportKey;
use crate::generators::{sample_cases, sample_users};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Number of records removed by [`Seeder::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSummary {
    pub users_deleted: u64,
    pub cases_deleted: u64,
}

/// Identifiers assigned to the sample records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleIds {
    pub admin_user: ObjectId,
    pub org_user: ObjectId,
    pub normal_user: ObjectId,
    pub approved_case: ObjectId,
    pub pending_case: ObjectId,
}

impl SampleIds {
    /// The ids paired with their export keys, in key order.
    pub fn entries(&self) -> [(ExportKey, ObjectId); 5] {
        [
            (ExportKey::AdminUser, self.admin_user),
            (ExportKey::OrgUser, self.org_user),
            (ExportKey::NormalUser, self.normal_user),
            (ExportKey::ApprovedCase, self.approved_case),
            (ExportKey::PendingCase, self.pending_case),
        ]
    }

    /// `key=<hex id>` lines for the console.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(key, id)| format!("{key}={id}"))
            .collect()
    }
}

/// Outcome of [`Seeder::seed_generated`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSeedSummary {
    pub user_ids: Vec<ObjectId>,
    pub users_skipped: usize,
    pub case_ids: Vec<ObjectId>,
}

/// Seeder for inserting test data into a record store.
pub struct Seeder<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Deletes every user and every case.
    pub async fn reset(&self) -> Result<ResetSummary, SeedError> {
        let users_deleted = self.store.clear_users().await?;
        let cases_deleted = self.store.clear_cases().await?;

        info!("Cleared {users_deleted} users and {cases_deleted} cases");
        Ok(ResetSummary {
            users_deleted,
            cases_deleted,
        })
    }

    /// Resets both collections to the fixed sample state: three users and
    /// two cases, with `now` as the cases' creation time.
    pub async fn seed_sample(&self, now: OffsetDateTime) -> Result<SampleIds, SeedError> {
        self.reset().await?;

        info!("Seeding sample users...");
        let users = sample_users();
        let admin_user = self.store.insert_user(&users.admin).await?;
        let org_user = self.store.insert_user(&users.org).await?;
        let normal_user = self.store.insert_user(&users.normal).await?;

        info!("Seeding sample cases...");
        let cases = sample_cases(normal_user, org_user, now);
        let approved_case = self.store.insert_case(&cases.approved).await?;
        let pending_case = self.store.insert_case(&cases.pending).await?;

        info!("Seeded 3 users and 2 cases");
        Ok(SampleIds {
            admin_user,
            org_user,
            normal_user,
            approved_case,
            pending_case,
        })
    }

    /// Inserts generated users and cases without deleting anything.
    ///
    /// Users whose email already exists are skipped.
    pub async fn seed_generated(
        &self,
        users: &[NewUser],
        cases: &[NewCase],
    ) -> Result<BulkSeedSummary, SeedError> {
        let mut summary = BulkSeedSummary::default();
        self.insert_users(users, &mut summary).await?;
        self.insert_cases(cases, &mut summary).await?;
        Ok(summary)
    }

    /// Inserts users that are not already present (by email), recording the
    /// outcome in `summary`.
    pub async fn insert_users(
        &self,
        users: &[NewUser],
        summary: &mut BulkSeedSummary,
    ) -> Result<(), SeedError> {
        info!("Seeding {} users...", users.len());

        let inserted_before = summary.user_ids.len();
        let skipped_before = summary.users_skipped;
        for user in users {
            let existing = self
                .store
                .find_user(&UserLookup::email(user.email.as_str()))
                .await?;
            if existing.is_some() {
                warn!("User already exists, skipping: {}", user.email);
                summary.users_skipped += 1;
                continue;
            }

            summary.user_ids.push(self.store.insert_user(user).await?);
        }

        info!(
            "Seeded {} users ({} skipped)",
            summary.user_ids.len() - inserted_before,
            summary.users_skipped - skipped_before
        );
        Ok(())
    }

    /// Inserts cases as given, recording their ids in `summary`.
    pub async fn insert_cases(
        &self,
        cases: &[NewCase],
        summary: &mut BulkSeedSummary,
    ) -> Result<(), SeedError> {
        info!("Seeding {} cases...", cases.len());

        for (i, case) in cases.iter().enumerate() {
            summary.case_ids.push(self.store.insert_case(case).await?);

            if (i + 1) % 50 == 0 {
                info!("  Seeded {}/{} cases", i + 1, cases.len());
            }
        }

        info!("Seeded {} cases", cases.len());
        Ok(())
    }
}
