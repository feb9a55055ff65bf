//! Patient entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vetclinic_core::types::{DbId, Timestamp};

/// A patient row from the `patients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Patient {
    pub id: DbId,
    pub guardian_id: DbId,
    pub name: String,
    pub species: String,
    pub birth_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a patient under an existing guardian.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePatient {
    pub guardian_id: DbId,
    pub name: String,
    pub species: String,
    pub birth_date: Option<String>,
}

/// Patient fields exposed in the with-patients listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientSummary {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub birth_date: Option<String>,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name.clone(),
            species: patient.species.clone(),
            birth_date: patient.birth_date.clone(),
        }
    }
}
