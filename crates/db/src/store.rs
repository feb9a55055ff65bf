//! The storage capability the guardian service is built on.
//!
//! [`GuardianStore`] is object safe so the HTTP layer can hold an
//! `Arc<dyn GuardianStore>` and tests can substitute an in-memory fake.
//! [`PgGuardianStore`] is the PostgreSQL implementation, delegating to
//! [`GuardianRepo`] and [`PatientRepo`].

use std::collections::HashMap;

use async_trait::async_trait;
use vetclinic_core::types::DbId;

use crate::models::guardian::{CreateGuardian, Guardian, GuardianWithPatients};
use crate::models::patient::Patient;
use crate::repositories::{GuardianRepo, PatientRepo};
use crate::DbPool;

/// Storage operations for guardians and the patients they own.
#[async_trait]
pub trait GuardianStore: Send + Sync {
    async fn find_guardian_by_email(&self, email: &str) -> Result<Option<Guardian>, sqlx::Error>;

    async fn find_guardian_by_id(&self, id: DbId) -> Result<Option<Guardian>, sqlx::Error>;

    async fn create_guardian(&self, input: &CreateGuardian) -> Result<Guardian, sqlx::Error>;

    /// Persist mutations made to a loaded guardian.
    async fn save_guardian(&self, guardian: &Guardian) -> Result<Guardian, sqlx::Error>;

    async fn list_guardians(&self) -> Result<Vec<Guardian>, sqlx::Error>;

    /// Every guardian with its patients eagerly loaded.
    async fn list_guardians_with_patients(&self)
        -> Result<Vec<GuardianWithPatients>, sqlx::Error>;

    async fn find_guardian_with_patients(
        &self,
        id: DbId,
    ) -> Result<Option<GuardianWithPatients>, sqlx::Error>;

    /// Delete all given patients in one call. Returns the number removed.
    async fn delete_patients(&self, patients: &[Patient]) -> Result<u64, sqlx::Error>;

    /// Returns `true` if the guardian row was removed.
    async fn delete_guardian(&self, guardian: &Guardian) -> Result<bool, sqlx::Error>;
}

/// [`GuardianStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgGuardianStore {
    pool: DbPool,
}

impl PgGuardianStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuardianStore for PgGuardianStore {
    async fn find_guardian_by_email(&self, email: &str) -> Result<Option<Guardian>, sqlx::Error> {
        GuardianRepo::find_by_email(&self.pool, email).await
    }

    async fn find_guardian_by_id(&self, id: DbId) -> Result<Option<Guardian>, sqlx::Error> {
        GuardianRepo::find_by_id(&self.pool, id).await
    }

    async fn create_guardian(&self, input: &CreateGuardian) -> Result<Guardian, sqlx::Error> {
        GuardianRepo::create(&self.pool, input).await
    }

    async fn save_guardian(&self, guardian: &Guardian) -> Result<Guardian, sqlx::Error> {
        GuardianRepo::save(&self.pool, guardian).await
    }

    async fn list_guardians(&self) -> Result<Vec<Guardian>, sqlx::Error> {
        GuardianRepo::list(&self.pool).await
    }

    async fn list_guardians_with_patients(
        &self,
    ) -> Result<Vec<GuardianWithPatients>, sqlx::Error> {
        let guardians = GuardianRepo::list(&self.pool).await?;
        let mut by_guardian: HashMap<DbId, Vec<Patient>> = HashMap::new();
        for patient in PatientRepo::list_all(&self.pool).await? {
            by_guardian.entry(patient.guardian_id).or_default().push(patient);
        }

        Ok(guardians
            .into_iter()
            .map(|guardian| {
                let patients = by_guardian.remove(&guardian.id).unwrap_or_default();
                GuardianWithPatients { guardian, patients }
            })
            .collect())
    }

    async fn find_guardian_with_patients(
        &self,
        id: DbId,
    ) -> Result<Option<GuardianWithPatients>, sqlx::Error> {
        let Some(guardian) = GuardianRepo::find_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        let patients = PatientRepo::list_by_guardian(&self.pool, id).await?;
        Ok(Some(GuardianWithPatients { guardian, patients }))
    }

    async fn delete_patients(&self, patients: &[Patient]) -> Result<u64, sqlx::Error> {
        let ids: Vec<DbId> = patients.iter().map(|p| p.id).collect();
        let deleted = PatientRepo::delete_many(&self.pool, &ids).await?;
        tracing::debug!(requested = ids.len(), deleted, "Deleted patients");
        Ok(deleted)
    }

    async fn delete_guardian(&self, guardian: &Guardian) -> Result<bool, sqlx::Error> {
        GuardianRepo::delete(&self.pool, guardian.id).await
    }
}
