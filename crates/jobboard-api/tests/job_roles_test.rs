//! Job-role and catalogue integration tests.
//!
//! Run with: `cargo test -p jobboard-api --test job_roles_test`

mod helpers;

use helpers::auth::{create_admin, create_applicant};
use helpers::fixtures::{application_form, cv_part, job_role_body, minimal_pdf};
use helpers::{api_path, setup_test_app};
use jobboard_core::models::{Band, Capability, JobRoleStatus, JobRoleSummary};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_list_job_roles_ordered_by_closing_date() {
    let app = setup_test_app().await;
    let user = create_applicant(&app, "ada@example.com").await;

    let response = app
        .client()
        .get(&api_path("/job-roles"))
        .add_header("Authorization", user.bearer())
        .await;

    assert_eq!(response.status_code(), 200);
    let roles: Vec<JobRoleSummary> = response.json();
    let names: Vec<&str> = roles.iter().map(|r| r.role_name.as_str()).collect();
    assert_eq!(names, vec!["Data Analyst", "Software Engineer"]);
    assert_eq!(roles[1].capability_name, "Engineering");
    assert_eq!(roles[1].band_name, "Associate");
    assert_eq!(roles[1].status_name, "open");
}

#[tokio::test]
async fn test_list_job_roles_filters() {
    let app = setup_test_app().await;
    let user = create_applicant(&app, "ada@example.com").await;

    let open: Vec<JobRoleSummary> = app
        .client()
        .get(&api_path("/job-roles"))
        .add_query_param("open", true)
        .add_header("Authorization", user.bearer())
        .await
        .json();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, app.db.seed.open_role_id);

    let not_open: Vec<JobRoleSummary> = app
        .client()
        .get(&api_path("/job-roles"))
        .add_query_param("open", false)
        .add_header("Authorization", user.bearer())
        .await
        .json();
    assert_eq!(not_open.len(), 1);
    assert_eq!(not_open[0].id, app.db.seed.closed_role_id);

    let other_capability: Vec<JobRoleSummary> = app
        .client()
        .get(&api_path("/job-roles"))
        .add_query_param("capabilityId", Uuid::new_v4())
        .add_header("Authorization", user.bearer())
        .await
        .json();
    assert!(other_capability.is_empty());

    let bad = app
        .client()
        .get(&api_path("/job-roles"))
        .add_query_param("bandId", "nope")
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(bad.status_code(), 400);
}

#[tokio::test]
async fn test_get_job_role() {
    let app = setup_test_app().await;
    let user = create_applicant(&app, "ada@example.com").await;

    let found = app
        .client()
        .get(&api_path(&format!("/job-roles/{}", app.db.seed.open_role_id)))
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(found.status_code(), 200);
    assert_eq!(found.json::<JobRoleSummary>().role_name, "Software Engineer");

    let missing = app
        .client()
        .get(&api_path(&format!("/job-roles/{}", Uuid::new_v4())))
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn test_admin_manages_job_roles() {
    let app = setup_test_app().await;
    let admin = create_admin(&app).await;
    let seed = app.db.seed;
    let body = job_role_body(seed.capability_id, seed.band_id, seed.open_status_id);

    let created = app
        .client()
        .post(&api_path("/job-roles"))
        .add_header("Authorization", admin.bearer())
        .json(&body)
        .await;
    assert_eq!(created.status_code(), 201);
    let role: JobRoleSummary = created.json();
    assert_eq!(role.role_name, "Platform Engineer");
    assert_eq!(role.number_of_open_positions, 3);

    let mut replacement = body.clone();
    replacement["roleName"] = json!("Senior Platform Engineer");
    replacement["statusId"] = json!(seed.closed_status_id);
    let updated = app
        .client()
        .put(&api_path(&format!("/job-roles/{}", role.id)))
        .add_header("Authorization", admin.bearer())
        .json(&replacement)
        .await;
    assert_eq!(updated.status_code(), 200);
    let updated: JobRoleSummary = updated.json();
    assert_eq!(updated.role_name, "Senior Platform Engineer");
    assert_eq!(updated.status_name, "closed");

    let deleted = app
        .client()
        .delete(&api_path(&format!("/job-roles/{}", role.id)))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(deleted.status_code(), 204);

    let gone = app
        .client()
        .delete(&api_path(&format!("/job-roles/{}", role.id)))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(gone.status_code(), 404);
}

#[tokio::test]
async fn test_job_role_validation() {
    let app = setup_test_app().await;
    let admin = create_admin(&app).await;
    let seed = app.db.seed;

    let mut zero_positions = job_role_body(seed.capability_id, seed.band_id, seed.open_status_id);
    zero_positions["numberOfOpenPositions"] = json!(0);
    let response = app
        .client()
        .post(&api_path("/job-roles"))
        .add_header("Authorization", admin.bearer())
        .json(&zero_positions)
        .await;
    assert_eq!(response.status_code(), 400);

    let unknown_band = job_role_body(seed.capability_id, Uuid::new_v4(), seed.open_status_id);
    let response = app
        .client()
        .post(&api_path("/job-roles"))
        .add_header("Authorization", admin.bearer())
        .json(&unknown_band)
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_applicant_cannot_manage_job_roles() {
    let app = setup_test_app().await;
    let user = create_applicant(&app, "ada@example.com").await;
    let seed = app.db.seed;

    let response = app
        .client()
        .post(&api_path("/job-roles"))
        .add_header("Authorization", user.bearer())
        .json(&job_role_body(seed.capability_id, seed.band_id, seed.open_status_id))
        .await;
    assert_eq!(response.status_code(), 403);

    let response = app
        .client()
        .delete(&api_path(&format!("/job-roles/{}", seed.open_role_id)))
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_delete_job_role_with_applications_conflicts() {
    let app = setup_test_app().await;
    let admin = create_admin(&app).await;
    let user = create_applicant(&app, "ada@example.com").await;
    let role_id = app.db.seed.open_role_id;

    let submitted = app
        .client()
        .post(&api_path("/applications"))
        .add_header("Authorization", user.bearer())
        .multipart(application_form(
            None,
            role_id,
            Some(cv_part(minimal_pdf(), "cv.pdf", "application/pdf")),
        ))
        .await;
    assert_eq!(submitted.status_code(), 201);

    let response = app
        .client()
        .delete(&api_path(&format!("/job-roles/{}", role_id)))
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
async fn test_catalogue_listing_and_creation() {
    let app = setup_test_app().await;
    let admin = create_admin(&app).await;
    let user = create_applicant(&app, "ada@example.com").await;

    let created = app
        .client()
        .post(&api_path("/capabilities"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "  Data  " }))
        .await;
    assert_eq!(created.status_code(), 201);
    assert_eq!(created.json::<Capability>().name, "Data");

    let duplicate = app
        .client()
        .post(&api_path("/capabilities"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "Data" }))
        .await;
    assert_eq!(duplicate.status_code(), 409);

    let capabilities: Vec<Capability> = app
        .client()
        .get(&api_path("/capabilities"))
        .add_header("Authorization", user.bearer())
        .await
        .json();
    let names: Vec<&str> = capabilities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Data", "Engineering"]);

    let band = app
        .client()
        .post(&api_path("/bands"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "Trainee", "level": 0 }))
        .await;
    assert_eq!(band.status_code(), 201);

    let bands: Vec<Band> = app
        .client()
        .get(&api_path("/bands"))
        .add_header("Authorization", user.bearer())
        .await
        .json();
    let levels: Vec<i32> = bands.iter().map(|b| b.level).collect();
    assert_eq!(levels, vec![0, 1]);

    let negative = app
        .client()
        .post(&api_path("/bands"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "Below", "level": -1 }))
        .await;
    assert_eq!(negative.status_code(), 400);

    let statuses: Vec<JobRoleStatus> = app
        .client()
        .get(&api_path("/job-role-statuses"))
        .add_header("Authorization", user.bearer())
        .await
        .json();
    assert_eq!(statuses.len(), 2);

    let forbidden = app
        .client()
        .post(&api_path("/bands"))
        .add_header("Authorization", user.bearer())
        .json(&json!({ "name": "Principal", "level": 5 }))
        .await;
    assert_eq!(forbidden.status_code(), 403);
}

#[tokio::test]
async fn test_blank_names_are_rejected() {
    let app = setup_test_app().await;
    let admin = create_admin(&app).await;
    let seed = app.db.seed;

    let capability = app
        .client()
        .post(&api_path("/capabilities"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "   " }))
        .await;
    assert_eq!(capability.status_code(), 400);

    let band = app
        .client()
        .post(&api_path("/bands"))
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": " \t ", "level": 4 }))
        .await;
    assert_eq!(band.status_code(), 400);

    let mut blank_role = job_role_body(seed.capability_id, seed.band_id, seed.open_status_id);
    blank_role["roleName"] = json!("    ");
    let role = app
        .client()
        .post(&api_path("/job-roles"))
        .add_header("Authorization", admin.bearer())
        .json(&blank_role)
        .await;
    assert_eq!(role.status_code(), 400);

    let capabilities: Vec<Capability> = app
        .client()
        .get(&api_path("/capabilities"))
        .add_header("Authorization", admin.bearer())
        .await
        .json();
    assert!(capabilities.iter().all(|c| !c.name.trim().is_empty()));
}
