pub mod guardian;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /guardians                  list, create
/// /guardians/patients         list with owned patients
/// /guardians/{id}             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/guardians", guardian::router())
}
