//! OpenAPI documentation served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::models as auth_models;
use crate::error;
use crate::handlers;
use jobboard_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Registers the bearer JWT scheme issued by `/api/auth/login`.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Board API",
        version = "0.1.0",
        description = "Job-role listings, capability and band taxonomy, and CV-upload applications. \
            Every endpoint except login, registration and the health probes requires a bearer token."
    ),
    modifiers(&BearerAuth),
    security(("bearer_auth" = [])),
    paths(
        // Auth
        handlers::auth::login,
        handlers::auth::register,
        handlers::auth::me,
        // Catalogue
        handlers::catalogue::list_capabilities,
        handlers::catalogue::create_capability,
        handlers::catalogue::list_bands,
        handlers::catalogue::create_band,
        handlers::catalogue::list_job_role_statuses,
        // Job roles
        handlers::job_roles::list_job_roles,
        handlers::job_roles::get_job_role,
        handlers::job_roles::create_job_role,
        handlers::job_roles::update_job_role,
        handlers::job_roles::delete_job_role,
        // Applications
        handlers::applications::submit_application,
        handlers::applications::list_applications,
        handlers::applications::get_application,
        handlers::applications::download_cv,
        handlers::applications::update_application_status,
    ),
    components(
        schemas(
            models::Capability,
            models::Band,
            models::JobRoleStatus,
            models::CreateCapabilityRequest,
            models::CreateBandRequest,
            models::JobRoleSummary,
            models::JobRoleRequest,
            models::Application,
            models::ApplicationStatus,
            models::UpdateApplicationStatusRequest,
            models::UserResponse,
            models::UserRole,
            auth_models::LoginRequest,
            auth_models::RegisterRequest,
            auth_models::AuthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "auth", description = "Login, registration and the current account"),
        (name = "catalogue", description = "Capabilities, bands and job-role statuses"),
        (name = "job-roles", description = "Job-role listings and administration"),
        (name = "applications", description = "CV submission and application review")
    )
)]
pub struct ApiDoc;
