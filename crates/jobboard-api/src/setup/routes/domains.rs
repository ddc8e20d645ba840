//! Domain route groups (auth, catalogue, job roles, applications).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, patch, post};
use axum::Router;
use std::sync::Arc;

/// Login and registration; reachable without a token.
pub fn auth_public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{}/auth/login", API_PREFIX), post(handlers::auth::login))
        .route(
            &format!("{}/auth/register", API_PREFIX),
            post(handlers::auth::register),
        )
}

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{}/auth/me", API_PREFIX), get(handlers::auth::me))
}

pub fn catalogue_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/capabilities", API_PREFIX),
            get(handlers::catalogue::list_capabilities).post(handlers::catalogue::create_capability),
        )
        .route(
            &format!("{}/bands", API_PREFIX),
            get(handlers::catalogue::list_bands).post(handlers::catalogue::create_band),
        )
        .route(
            &format!("{}/job-role-statuses", API_PREFIX),
            get(handlers::catalogue::list_job_role_statuses),
        )
}

pub fn job_role_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/job-roles", API_PREFIX),
            get(handlers::job_roles::list_job_roles).post(handlers::job_roles::create_job_role),
        )
        .route(
            &format!("{}/job-roles/{{id}}", API_PREFIX),
            get(handlers::job_roles::get_job_role)
                .put(handlers::job_roles::update_job_role)
                .delete(handlers::job_roles::delete_job_role),
        )
}

pub fn application_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/applications", API_PREFIX),
            post(handlers::applications::submit_application)
                .get(handlers::applications::list_applications),
        )
        .route(
            &format!("{}/applications/{{id}}", API_PREFIX),
            get(handlers::applications::get_application),
        )
        .route(
            &format!("{}/applications/{{id}}/cv", API_PREFIX),
            get(handlers::applications::download_cv),
        )
        .route(
            &format!("{}/applications/{{id}}/status", API_PREFIX),
            patch(handlers::applications::update_application_status),
        )
}
