//! Route definitions for the `/guardians` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::guardian;
use crate::state::AppState;

/// Routes mounted at `/guardians`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /patients      -> list_with_patients
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guardian::list).post(guardian::create))
        .route("/patients", get(guardian::list_with_patients))
        .route("/{id}", put(guardian::update).delete(guardian::delete))
}
