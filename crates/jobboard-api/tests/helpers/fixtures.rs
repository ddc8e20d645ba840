//! Test fixtures: minimal CV documents and request bodies.

use axum_test::multipart::{MultipartForm, Part};
use uuid::Uuid;

/// Smallest PDF most readers will open.
pub fn minimal_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj<</Type/Catalog/Pages 2 0 R>>endobj\n\
2 0 obj<</Type/Pages/Kids[]/Count 0>>endobj\n\
trailer<</Root 1 0 R>>\n%%EOF\n"
        .to_vec()
}

pub fn cv_part(data: Vec<u8>, file_name: &str, mime_type: &str) -> Part {
    Part::bytes(data).file_name(file_name).mime_type(mime_type)
}

/// Multipart body for a submission: `userId` (when given), `jobRoleId` and a `cv` file.
pub fn application_form(user_id: Option<Uuid>, job_role_id: Uuid, cv: Option<Part>) -> MultipartForm {
    let mut form = MultipartForm::new().add_text("jobRoleId", job_role_id.to_string());
    if let Some(user_id) = user_id {
        form = form.add_text("userId", user_id.to_string());
    }
    if let Some(cv) = cv {
        form = form.add_part("cv", cv);
    }
    form
}

pub fn job_role_body(capability_id: Uuid, band_id: Uuid, status_id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "roleName": "Platform Engineer",
        "description": "Runs the platform",
        "responsibilities": "Keep the lights on",
        "jobSpecUrl": "https://example.com/platform.pdf",
        "location": "Derry",
        "capabilityId": capability_id,
        "bandId": band_id,
        "statusId": status_id,
        "closingDate": "2030-03-15",
        "numberOfOpenPositions": 3
    })
}
