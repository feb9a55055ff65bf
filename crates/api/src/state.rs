use std::sync::Arc;

use vetclinic_db::store::PgGuardianStore;

use crate::config::ServerConfig;
use crate::services::GuardianService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and service are reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vetclinic_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Guardian lifecycle operations.
    pub guardians: GuardianService,
}

impl AppState {
    /// Wire the PostgreSQL-backed guardian service onto `pool`.
    pub fn new(pool: vetclinic_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgGuardianStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            guardians: GuardianService::new(store),
        }
    }
}
