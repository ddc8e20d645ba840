//! In-memory implementations of the `jobboard-db` store traits, plus storage that
//! always fails, so the router can be exercised without PostgreSQL or S3.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use jobboard_core::models::{
    Application, ApplicationFilter, ApplicationStatus, Band, Capability, JobRole, JobRoleFilter,
    JobRoleRequest, JobRoleStatus, JobRoleSummary, NewApplication, NewUser, User,
};
use jobboard_core::AppError;
use jobboard_db::{ApplicationStore, CatalogueStore, DatabaseHealth, JobRoleStore, UserStore};
use jobboard_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    capabilities: Vec<Capability>,
    bands: Vec<Band>,
    statuses: Vec<JobRoleStatus>,
    job_roles: Vec<JobRole>,
    applications: Vec<Application>,
}

/// Ids of the rows every test database starts with.
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    pub capability_id: Uuid,
    pub band_id: Uuid,
    pub open_status_id: Uuid,
    pub closed_status_id: Uuid,
    /// "Software Engineer", open, closes 2030-06-30
    pub open_role_id: Uuid,
    /// "Data Analyst", closed, closes 2030-01-31
    pub closed_role_id: Uuid,
}

pub struct InMemoryDb {
    tables: Mutex<Tables>,
    pub seed: Seed,
    /// When set, `create_application` fails like a lost connection
    pub fail_applications: AtomicBool,
    /// When set, `ping` fails
    pub unhealthy: AtomicBool,
    pub create_application_calls: AtomicUsize,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

impl InMemoryDb {
    pub fn seeded() -> Self {
        let seed = Seed {
            capability_id: Uuid::new_v4(),
            band_id: Uuid::new_v4(),
            open_status_id: Uuid::new_v4(),
            closed_status_id: Uuid::new_v4(),
            open_role_id: Uuid::new_v4(),
            closed_role_id: Uuid::new_v4(),
        };
        let now = Utc::now();
        let role = |id: Uuid, role_name: &str, status_id: Uuid, closing_date: NaiveDate| JobRole {
            id,
            role_name: role_name.to_string(),
            description: format!("{} role", role_name),
            responsibilities: "Deliver".to_string(),
            job_spec_url: "https://example.com/spec.pdf".to_string(),
            location: "Belfast".to_string(),
            capability_id: seed.capability_id,
            band_id: seed.band_id,
            status_id,
            closing_date,
            number_of_open_positions: 2,
            created_at: now,
            updated_at: now,
        };

        let tables = Tables {
            users: Vec::new(),
            capabilities: vec![Capability {
                id: seed.capability_id,
                name: "Engineering".to_string(),
            }],
            bands: vec![Band {
                id: seed.band_id,
                name: "Associate".to_string(),
                level: 1,
            }],
            statuses: vec![
                JobRoleStatus {
                    id: seed.open_status_id,
                    name: "open".to_string(),
                },
                JobRoleStatus {
                    id: seed.closed_status_id,
                    name: "closed".to_string(),
                },
            ],
            job_roles: vec![
                role(
                    seed.open_role_id,
                    "Software Engineer",
                    seed.open_status_id,
                    date(2030, 6, 30),
                ),
                role(
                    seed.closed_role_id,
                    "Data Analyst",
                    seed.closed_status_id,
                    date(2030, 1, 31),
                ),
            ],
            applications: Vec::new(),
        };

        Self {
            tables: Mutex::new(tables),
            seed,
            fail_applications: AtomicBool::new(false),
            unhealthy: AtomicBool::new(false),
            create_application_calls: AtomicUsize::new(0),
        }
    }

    pub fn applications(&self) -> Vec<Application> {
        self.tables.lock().unwrap().applications.clone()
    }
}

fn summarize(tables: &Tables, role: &JobRole) -> JobRoleSummary {
    let capability = tables
        .capabilities
        .iter()
        .find(|c| c.id == role.capability_id)
        .expect("seeded capability");
    let band = tables
        .bands
        .iter()
        .find(|b| b.id == role.band_id)
        .expect("seeded band");
    let status = tables
        .statuses
        .iter()
        .find(|s| s.id == role.status_id)
        .expect("seeded status");
    JobRoleSummary {
        id: role.id,
        role_name: role.role_name.clone(),
        description: role.description.clone(),
        responsibilities: role.responsibilities.clone(),
        job_spec_url: role.job_spec_url.clone(),
        location: role.location.clone(),
        capability_id: capability.id,
        capability_name: capability.name.clone(),
        band_id: band.id,
        band_name: band.name.clone(),
        band_level: band.level,
        status_id: status.id,
        status_name: status.name.clone(),
        closing_date: role.closing_date,
        number_of_open_positions: role.number_of_open_positions,
        created_at: role.created_at,
        updated_at: role.updated_at,
    }
}

fn check_references(tables: &Tables, request: &JobRoleRequest) -> Result<(), AppError> {
    if !tables.capabilities.iter().any(|c| c.id == request.capability_id) {
        return Err(AppError::InvalidInput("Unknown capability".to_string()));
    }
    if !tables.bands.iter().any(|b| b.id == request.band_id) {
        return Err(AppError::InvalidInput("Unknown band".to_string()));
    }
    if !tables.statuses.iter().any(|s| s.id == request.status_id) {
        return Err(AppError::InvalidInput("Unknown job role status".to_string()));
    }
    Ok(())
}

#[async_trait]
impl UserStore for InMemoryDb {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }
        let created = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl CatalogueStore for InMemoryDb {
    async fn list_capabilities(&self) -> Result<Vec<Capability>, AppError> {
        let mut capabilities = self.tables.lock().unwrap().capabilities.clone();
        capabilities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(capabilities)
    }

    async fn create_capability(&self, name: &str) -> Result<Capability, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.capabilities.iter().any(|c| c.name == name) {
            return Err(AppError::Conflict(format!(
                "Capability '{}' already exists",
                name
            )));
        }
        let capability = Capability {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        tables.capabilities.push(capability.clone());
        Ok(capability)
    }

    async fn list_bands(&self) -> Result<Vec<Band>, AppError> {
        let mut bands = self.tables.lock().unwrap().bands.clone();
        bands.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
        Ok(bands)
    }

    async fn create_band(&self, name: &str, level: i32) -> Result<Band, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.bands.iter().any(|b| b.name == name) {
            return Err(AppError::Conflict(format!("Band '{}' already exists", name)));
        }
        let band = Band {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level,
        };
        tables.bands.push(band.clone());
        Ok(band)
    }

    async fn list_job_role_statuses(&self) -> Result<Vec<JobRoleStatus>, AppError> {
        let mut statuses = self.tables.lock().unwrap().statuses.clone();
        statuses.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(statuses)
    }
}

#[async_trait]
impl JobRoleStore for InMemoryDb {
    async fn list_job_roles(
        &self,
        filter: &JobRoleFilter,
    ) -> Result<Vec<JobRoleSummary>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut roles: Vec<JobRoleSummary> = tables
            .job_roles
            .iter()
            .map(|role| summarize(&tables, role))
            .filter(|s| filter.capability_id.map_or(true, |id| s.capability_id == id))
            .filter(|s| filter.band_id.map_or(true, |id| s.band_id == id))
            .filter(|s| filter.open.map_or(true, |open| s.is_open() == open))
            .collect();
        roles.sort_by(|a, b| {
            a.closing_date
                .cmp(&b.closing_date)
                .then_with(|| a.role_name.cmp(&b.role_name))
        });
        Ok(roles)
    }

    async fn get_job_role(&self, id: Uuid) -> Result<Option<JobRoleSummary>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .job_roles
            .iter()
            .find(|r| r.id == id)
            .map(|role| summarize(&tables, role)))
    }

    async fn job_role_exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.tables.lock().unwrap().job_roles.iter().any(|r| r.id == id))
    }

    async fn create_job_role(&self, request: &JobRoleRequest) -> Result<JobRoleSummary, AppError> {
        let mut tables = self.tables.lock().unwrap();
        check_references(&tables, request)?;
        let now = Utc::now();
        let role = JobRole {
            id: Uuid::new_v4(),
            role_name: request.role_name.clone(),
            description: request.description.clone(),
            responsibilities: request.responsibilities.clone(),
            job_spec_url: request.job_spec_url.clone(),
            location: request.location.clone(),
            capability_id: request.capability_id,
            band_id: request.band_id,
            status_id: request.status_id,
            closing_date: request.closing_date,
            number_of_open_positions: request.number_of_open_positions,
            created_at: now,
            updated_at: now,
        };
        let summary = summarize(&tables, &role);
        tables.job_roles.push(role);
        Ok(summary)
    }

    async fn update_job_role(
        &self,
        id: Uuid,
        request: &JobRoleRequest,
    ) -> Result<Option<JobRoleSummary>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        check_references(&tables, request)?;
        let Some(index) = tables.job_roles.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let role = &mut tables.job_roles[index];
        role.role_name = request.role_name.clone();
        role.description = request.description.clone();
        role.responsibilities = request.responsibilities.clone();
        role.job_spec_url = request.job_spec_url.clone();
        role.location = request.location.clone();
        role.capability_id = request.capability_id;
        role.band_id = request.band_id;
        role.status_id = request.status_id;
        role.closing_date = request.closing_date;
        role.number_of_open_positions = request.number_of_open_positions;
        role.updated_at = Utc::now();
        let role = role.clone();
        Ok(Some(summarize(&tables, &role)))
    }

    async fn delete_job_role(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.applications.iter().any(|a| a.job_role_id == id) {
            return Err(AppError::Conflict(
                "Job role has applications and cannot be deleted".to_string(),
            ));
        }
        let before = tables.job_roles.len();
        tables.job_roles.retain(|r| r.id != id);
        Ok(tables.job_roles.len() != before)
    }
}

#[async_trait]
impl ApplicationStore for InMemoryDb {
    async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, AppError> {
        self.create_application_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_applications.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        let created = Application {
            id: application.id,
            user_id: application.user_id,
            job_role_id: application.job_role_id,
            status: application.status,
            cv_url: application.cv_url,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().applications.push(created.clone());
        Ok(created)
    }

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.applications.iter().find(|a| a.id == id).cloned())
    }

    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<Application>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut applications: Vec<Application> = tables
            .applications
            .iter()
            .filter(|a| filter.user_id.map_or(true, |id| a.user_id == id))
            .filter(|a| filter.job_role_id.map_or(true, |id| a.job_role_id == id))
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }

    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, AppError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .map(|a| {
                a.status = status;
                a.clone()
            }))
    }
}

#[async_trait]
impl DatabaseHealth for InMemoryDb {
    async fn ping(&self) -> Result<(), AppError> {
        if self.unhealthy.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Storage whose uploads always fail
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn upload_with_key(
        &self,
        _storage_key: &str,
        _data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        Err(StorageError::UploadFailed("bucket unreachable".to_string()))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::NotFound(storage_key.to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
