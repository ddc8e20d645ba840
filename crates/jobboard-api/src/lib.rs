//! Job Board API Library
//!
//! This crate provides the HTTP API handlers, auth, the CV submission workflow,
//! and application setup.

mod api_doc;
pub mod constants;
mod handlers;
pub mod services;
pub mod setup;
mod telemetry;
pub mod utils;
pub mod validation;

// Public modules
pub mod auth;
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use setup::routes::setup_routes;
pub use state::AppState;
