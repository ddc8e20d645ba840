//! Application state and sub-state extractors.
//!
//! AppState is split into sub-states so handlers can extract only what they need
//! via Axum's `FromRef`. Stores and storage are trait objects so the same router
//! runs against PostgreSQL/S3 in production and in-memory doubles in tests.

use crate::auth::JwtService;
use crate::validation::FileValidationGate;
use jobboard_core::Config;
use jobboard_db::{ApplicationStore, CatalogueStore, DatabaseHealth, JobRoleStore, UserStore};
use jobboard_storage::Storage;
use std::sync::Arc;

// ----- Sub-state types -----

/// Database collaborators
#[derive(Clone)]
pub struct DbState {
    pub users: Arc<dyn UserStore>,
    pub catalogue: Arc<dyn CatalogueStore>,
    pub job_roles: Arc<dyn JobRoleStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub health: Arc<dyn DatabaseHealth>,
}

/// Object storage plus the policy every CV upload must pass
#[derive(Clone)]
pub struct UploadConfig {
    pub storage: Arc<dyn Storage>,
    pub gate: FileValidationGate,
    pub max_file_size: usize,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt: Arc<JwtService>,
}

// ----- Main application state -----

pub struct AppState {
    pub db: DbState,
    pub upload: UploadConfig,
    pub auth: AuthConfig,
    pub config: Config,
}

impl AppState {
    /// Assemble state from already-constructed collaborators
    pub fn new(config: Config, db: DbState, storage: Arc<dyn Storage>) -> Self {
        let upload = UploadConfig {
            storage,
            gate: FileValidationGate::new(config.allowed_mime_types(), config.allowed_extensions()),
            max_file_size: config.max_file_size_bytes(),
        };
        let auth = AuthConfig {
            jwt: Arc::new(JwtService::new(
                config.jwt_secret(),
                config.jwt_expiry_hours(),
            )),
        };

        Self {
            db,
            upload,
            auth,
            config,
        }
    }
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for UploadConfig {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.upload.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for AuthConfig {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.auth.clone()
    }
}

#[allow(dead_code)]
fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
