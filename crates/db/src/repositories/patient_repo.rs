//! Repository for the `patients` table.

use sqlx::PgPool;
use vetclinic_core::types::DbId;

use crate::models::patient::{CreatePatient, Patient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, guardian_id, name, species, birth_date, created_at, updated_at";

/// Provides read, insert and bulk-delete operations for patients.
pub struct PatientRepo;

impl PatientRepo {
    /// Insert a new patient, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePatient) -> Result<Patient, sqlx::Error> {
        let query = format!(
            "INSERT INTO patients (guardian_id, name, species, birth_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(input.guardian_id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.birth_date)
            .fetch_one(pool)
            .await
    }

    /// Find a patient by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        sqlx::query_as::<_, Patient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the patients owned by one guardian, ordered by ID ascending.
    pub async fn list_by_guardian(
        pool: &PgPool,
        guardian_id: DbId,
    ) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM patients
             WHERE guardian_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Patient>(&query)
            .bind(guardian_id)
            .fetch_all(pool)
            .await
    }

    /// List every patient, ordered by owner then ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Patient>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM patients ORDER BY guardian_id ASC, id ASC");
        sqlx::query_as::<_, Patient>(&query).fetch_all(pool).await
    }

    /// Delete the given patients in a single statement. Returns the number removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM patients WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
