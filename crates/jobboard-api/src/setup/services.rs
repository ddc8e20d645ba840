//! Repository and service wiring

use crate::state::{AppState, DbState};
use jobboard_core::Config;
use jobboard_db::{
    ApplicationRepository, CatalogueRepository, HealthRepository, JobRoleRepository,
    UserRepository,
};
use jobboard_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

/// Build the PostgreSQL repositories and assemble the shared state
pub fn initialize_services(
    config: &Config,
    pool: PgPool,
    storage: Arc<dyn Storage>,
) -> Arc<AppState> {
    let db = postgres_stores(pool);
    tracing::info!("Repositories initialized");

    Arc::new(AppState::new(config.clone(), db, storage))
}

fn postgres_stores(pool: PgPool) -> DbState {
    DbState {
        users: Arc::new(UserRepository::new(pool.clone())),
        catalogue: Arc::new(CatalogueRepository::new(pool.clone())),
        job_roles: Arc::new(JobRoleRepository::new(pool.clone())),
        applications: Arc::new(ApplicationRepository::new(pool.clone())),
        health: Arc::new(HealthRepository::new(pool)),
    }
}
