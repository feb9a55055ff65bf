//! Repository for the `guardians` table.

use sqlx::PgPool;
use vetclinic_core::types::DbId;

use crate::models::guardian::{CreateGuardian, Guardian};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, created_at, updated_at";

/// Provides CRUD operations for guardians.
pub struct GuardianRepo;

impl GuardianRepo {
    /// Insert a new guardian, returning the created row.
    ///
    /// A duplicate email fails with a `23505` violation of `uq_guardians_email`.
    pub async fn create(pool: &PgPool, input: &CreateGuardian) -> Result<Guardian, sqlx::Error> {
        let query = format!(
            "INSERT INTO guardians (name, email, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guardian>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a guardian by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guardian>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guardians WHERE id = $1");
        sqlx::query_as::<_, Guardian>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a guardian by exact email match.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Guardian>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guardians WHERE email = $1");
        sqlx::query_as::<_, Guardian>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all guardians ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guardian>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guardians ORDER BY id ASC");
        sqlx::query_as::<_, Guardian>(&query).fetch_all(pool).await
    }

    /// Persist the name, email and phone of an already-loaded guardian.
    ///
    /// Fails with `RowNotFound` if the row was deleted in the meantime.
    pub async fn save(pool: &PgPool, guardian: &Guardian) -> Result<Guardian, sqlx::Error> {
        let query = format!(
            "UPDATE guardians SET
                name = $2,
                email = $3,
                phone = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guardian>(&query)
            .bind(guardian.id)
            .bind(&guardian.name)
            .bind(&guardian.email)
            .bind(&guardian.phone)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a guardian by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the guardian still owns patients.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guardians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
