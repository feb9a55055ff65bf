//! Handlers for the `/guardians` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vetclinic_core::guardian::GuardianInput;
use vetclinic_core::types::DbId;
use vetclinic_db::models::guardian::{Guardian, GuardianPatientsView};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/guardians
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Guardian>>> {
    let guardians = state.guardians.list_guardians().await?;
    Ok(Json(guardians))
}

/// GET /api/v1/guardians/patients
pub async fn list_with_patients(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GuardianPatientsView>>> {
    let views = state.guardians.list_guardians_with_patients().await?;
    Ok(Json(views))
}

/// POST /api/v1/guardians
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GuardianInput>,
) -> AppResult<(StatusCode, Json<Guardian>)> {
    let guardian = state.guardians.create_guardian(input).await?;
    Ok((StatusCode::CREATED, Json(guardian)))
}

/// PUT /api/v1/guardians/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GuardianInput>,
) -> AppResult<Json<Guardian>> {
    let guardian = state.guardians.update_guardian(id, input).await?;
    Ok(Json(guardian))
}

/// DELETE /api/v1/guardians/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.guardians.delete_guardian(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
