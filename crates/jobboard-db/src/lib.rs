//! Job Board Database Layer
//!
//! This crate provides the PostgreSQL repositories and the store traits the API
//! depends on.

pub mod db;
pub mod store_traits;

// Re-exports: Postgres repositories
pub use db::{
    ApplicationRepository, CatalogueRepository, HealthRepository, JobRoleRepository,
    UserRepository,
};

// Re-exports: store traits
pub use store_traits::{ApplicationStore, CatalogueStore, DatabaseHealth, JobRoleStore, UserStore};
