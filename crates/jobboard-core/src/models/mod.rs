//! Data models for the application
//!
//! This module contains the data structures shared by the storage, database and
//! API crates, organized by domain.

mod application;
mod catalogue;
mod job_role;
mod user;

pub use application::*;
pub use catalogue::*;
pub use job_role::*;
pub use user::*;
