//! Application submission workflow
//!
//! An ordered pipeline that stops at the first failure:
//! derive storage key → upload CV → persist application.
//!
//! The CV is uploaded before the row is written, so an application never points at
//! a missing object. The reverse is not guaranteed: when persistence fails after a
//! successful upload the object stays in storage and is only logged.

use std::sync::Arc;

use jobboard_core::models::{Application, NewApplication};
use jobboard_core::AppError;
use jobboard_db::ApplicationStore;
use jobboard_storage::{application_cv_key, Storage, StorageError};
use thiserror::Error;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("CV file is required")]
    FileMissing,

    #[error("Failed to upload CV: {0}")]
    UploadFailed(#[source] StorageError),

    #[error("Failed to save application: {0}")]
    PersistenceFailed(#[source] AppError),
}

/// Request-scoped upload as received from the client. Never persisted as-is.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadCandidate {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
    applications: Arc<dyn ApplicationStore>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>, applications: Arc<dyn ApplicationStore>) -> Self {
        Self {
            storage,
            applications,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.upload.storage.clone(),
            state.db.applications.clone(),
        )
    }

    /// Upload the CV and record a new `IN_PROGRESS` application.
    ///
    /// The file must already have passed the validation gate. The application id is
    /// generated here and doubles as the correlation segment of the storage key.
    #[tracing::instrument(
        skip(self, file),
        fields(
            user.id = %user_id,
            job_role.id = %job_role_id,
            file.size = file.size(),
            application.id = tracing::field::Empty
        )
    )]
    pub async fn submit(
        &self,
        user_id: Uuid,
        job_role_id: Uuid,
        file: UploadCandidate,
    ) -> Result<Application, SubmissionError> {
        let application_id = Uuid::new_v4();
        tracing::Span::current().record("application.id", tracing::field::display(application_id));

        let storage_key = application_cv_key(&application_id.to_string(), &file.filename);

        let cv_url = self
            .storage
            .upload_with_key(&storage_key, file.data, &file.content_type)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, storage_key = %storage_key, "CV upload failed");
                SubmissionError::UploadFailed(e)
            })?;

        let application = self
            .applications
            .create_application(NewApplication::in_progress(
                application_id,
                user_id,
                job_role_id,
                cv_url,
            ))
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    orphaned_key = %storage_key,
                    "Application not saved; uploaded CV left in storage"
                );
                SubmissionError::PersistenceFailed(e)
            })?;

        tracing::info!(
            application_id = %application.id,
            storage_key = %storage_key,
            "Application submitted"
        );

        Ok(application)
    }
}
