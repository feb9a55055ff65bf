//! Guardian entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vetclinic_core::guardian::GuardianFields;
use vetclinic_core::types::{DbId, Timestamp};

use crate::models::patient::{Patient, PatientSummary};

/// A guardian row from the `guardians` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guardian {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new guardian. Fields are already validated.
#[derive(Debug, Clone)]
pub struct CreateGuardian {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<GuardianFields> for CreateGuardian {
    fn from(fields: GuardianFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }
}

impl Guardian {
    /// Overwrite the mutable fields in place. Identity and timestamps are untouched.
    pub fn apply(&mut self, fields: GuardianFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}

/// Public projection of a guardian used in the with-patients listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardianSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Guardian> for GuardianSummary {
    fn from(guardian: &Guardian) -> Self {
        Self {
            id: guardian.id,
            name: guardian.name.clone(),
            email: guardian.email.clone(),
            phone: guardian.phone.clone(),
        }
    }
}

/// A guardian together with every patient it owns.
#[derive(Debug, Clone)]
pub struct GuardianWithPatients {
    pub guardian: Guardian,
    pub patients: Vec<Patient>,
}

/// Response shape for `GET /guardians/patients`.
///
/// `patients` is always serialized, as `[]` when the guardian has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardianPatientsView {
    pub guardian: GuardianSummary,
    pub patients: Vec<PatientSummary>,
}

impl From<&GuardianWithPatients> for GuardianPatientsView {
    fn from(loaded: &GuardianWithPatients) -> Self {
        Self {
            guardian: GuardianSummary::from(&loaded.guardian),
            patients: loaded.patients.iter().map(PatientSummary::from).collect(),
        }
    }
}
