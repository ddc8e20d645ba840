//! HTTP handlers, one module per resource

pub mod applications;
pub mod auth;
pub mod catalogue;
pub mod job_roles;
