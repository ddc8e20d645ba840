//! Business workflows invoked by handlers

pub mod auth;
pub mod submission;

pub use auth::AuthService;
pub use submission::{SubmissionError, SubmissionService, UploadCandidate};
