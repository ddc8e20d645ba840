//! Database repositories for data access layer
//!
//! Each repository owns a clone of the pool and implements one of the traits in
//! `store_traits`. Queries are runtime-checked (`query_as`) so the crate builds
//! without a live database.

mod constraint;

pub mod application;
pub mod catalogue;
pub mod health;
pub mod job_role;
pub mod user;

pub use application::ApplicationRepository;
pub use catalogue::CatalogueRepository;
pub use health::HealthRepository;
pub use job_role::JobRoleRepository;
pub use user::UserRepository;
