//! Guardian lifecycle: validation and orchestration over a [`GuardianStore`].
//!
//! Check ordering differs between operations and is kept as-is:
//! - create: required fields, then email uniqueness, then insert;
//! - update: existence, then required fields, then save. Update does not
//!   re-check email uniqueness; a clash is only caught by the store's
//!   `uq_guardians_email` constraint.
//!
//! The email pre-check on create is check-then-act. Two concurrent creates
//! can both pass it; the loser then fails on the store constraint.

use std::sync::Arc;

use vetclinic_core::error::CoreError;
use vetclinic_core::guardian::{
    GuardianFields, GuardianInput, DUPLICATE_EMAIL_MESSAGE, ENTITY_NAME,
};
use vetclinic_core::types::DbId;
use vetclinic_db::models::guardian::{CreateGuardian, Guardian, GuardianPatientsView};
use vetclinic_db::store::GuardianStore;

use crate::error::AppResult;

/// Guardian operations with an explicitly injected store.
#[derive(Clone)]
pub struct GuardianService {
    store: Arc<dyn GuardianStore>,
}

impl GuardianService {
    pub fn new(store: Arc<dyn GuardianStore>) -> Self {
        Self { store }
    }

    /// All guardians, unfiltered, in store order.
    pub async fn list_guardians(&self) -> AppResult<Vec<Guardian>> {
        Ok(self.store.list_guardians().await?)
    }

    /// Every guardian projected to `{ guardian, patients }` with its full patient list.
    pub async fn list_guardians_with_patients(&self) -> AppResult<Vec<GuardianPatientsView>> {
        let loaded = self.store.list_guardians_with_patients().await?;
        Ok(loaded.iter().map(GuardianPatientsView::from).collect())
    }

    pub async fn create_guardian(&self, input: GuardianInput) -> AppResult<Guardian> {
        let fields = require_fields(input)?;

        if self.store.find_guardian_by_email(&fields.email).await?.is_some() {
            tracing::warn!(email = %fields.email, "Rejected guardian with duplicate email");
            return Err(CoreError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()).into());
        }

        let guardian = self
            .store
            .create_guardian(&CreateGuardian::from(fields))
            .await?;
        tracing::info!(guardian_id = guardian.id, "Guardian created");
        Ok(guardian)
    }

    pub async fn update_guardian(&self, id: DbId, input: GuardianInput) -> AppResult<Guardian> {
        let mut guardian = self
            .store
            .find_guardian_by_id(id)
            .await?
            .ok_or(not_found(id))?;

        let fields = require_fields(input)?;
        guardian.apply(fields);

        let saved = self.store.save_guardian(&guardian).await?;
        tracing::info!(guardian_id = id, "Guardian updated");
        Ok(saved)
    }

    /// Delete a guardian and every patient it owns.
    ///
    /// Patients go first, in one store call, then the guardian. The two
    /// deletions are not wrapped in a transaction.
    pub async fn delete_guardian(&self, id: DbId) -> AppResult<()> {
        let loaded = self
            .store
            .find_guardian_with_patients(id)
            .await?
            .ok_or(not_found(id))?;

        if !loaded.patients.is_empty() {
            self.store.delete_patients(&loaded.patients).await?;
        }

        self.store.delete_guardian(&loaded.guardian).await?;
        tracing::info!(
            guardian_id = id,
            patients = loaded.patients.len(),
            "Guardian deleted"
        );
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}

fn require_fields(input: GuardianInput) -> Result<GuardianFields, CoreError> {
    let invalid = input.invalid_fields();
    input.into_fields().inspect_err(|_| {
        tracing::debug!(?invalid, "Rejected guardian with missing fields");
    })
}
