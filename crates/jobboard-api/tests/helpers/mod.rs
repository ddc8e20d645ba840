//! Test helpers: build AppState and router for integration tests.
//!
//! Stores are in-memory and CVs go to a local storage directory under a tempdir,
//! so `cargo test -p jobboard-api` needs neither PostgreSQL nor S3.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;
pub mod stores;

use axum_test::TestServer;
use jobboard_api::constants;
use jobboard_api::setup_routes;
use jobboard_api::state::{AppState, DbState};
use jobboard_core::{ApiConfig, Config};
use jobboard_storage::{LocalStorage, Storage};
use std::collections::HashMap;
use std::sync::Arc;
use stores::InMemoryDb;
use tempfile::TempDir;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";
pub const TEST_STORAGE_BASE_URL: &str = "http://localhost:4000/files";

/// API path prefix for tests (e.g. `/api`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server, in-memory database, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<InMemoryDb>,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn storage_dir(&self) -> &std::path::Path {
        self._temp_dir.path()
    }
}

/// Knobs for building a test app
#[derive(Default)]
pub struct TestOptions {
    /// Extra configuration variables, e.g. `MAX_FILE_SIZE_BYTES`
    pub vars: Vec<(&'static str, String)>,
    /// Replace the local storage backend
    pub storage: Option<Arc<dyn Storage>>,
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(TestOptions::default()).await
}

pub async fn setup_test_app_with(options: TestOptions) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(&temp_dir, &options.vars);

    let storage: Arc<dyn Storage> = match options.storage {
        Some(storage) => storage,
        None => Arc::new(
            LocalStorage::new(temp_dir.path(), TEST_STORAGE_BASE_URL.to_string())
                .await
                .expect("Failed to create local storage"),
        ),
    };

    let db = Arc::new(InMemoryDb::seeded());
    let db_state = DbState {
        users: db.clone(),
        catalogue: db.clone(),
        job_roles: db.clone(),
        applications: db.clone(),
        health: db.clone(),
    };

    let state = Arc::new(AppState::new(config.clone(), db_state, storage));
    let app = setup_routes(&config, state.clone())
        .await
        .expect("Failed to build router");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        db,
        state,
        _temp_dir: temp_dir,
    }
}

pub fn create_test_config(temp_dir: &TempDir, extra: &[(&'static str, String)]) -> Config {
    let mut vars: HashMap<&'static str, String> = HashMap::from([
        ("DATABASE_URL", "postgres://localhost/jobboard_test".to_string()),
        ("JWT_SECRET", TEST_JWT_SECRET.to_string()),
        ("STORAGE_BACKEND", "local".to_string()),
        ("LOCAL_STORAGE_PATH", temp_dir.path().display().to_string()),
        ("LOCAL_STORAGE_BASE_URL", TEST_STORAGE_BASE_URL.to_string()),
    ]);
    for (key, value) in extra {
        vars.insert(*key, value.clone());
    }
    let config = ApiConfig::from_lookup(|key| vars.get(key).cloned())
        .expect("Failed to build test config");
    Config(Box::new(config))
}
