//! Project boundary: CRUD over `/project`.

use super::api::{self, ApiError};
use super::types::{NewProject, Project, ProjectStatus};

/// `GET /project` — every project visible to the caller.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn list() -> Result<Vec<Project>, ApiError> {
    api::get_json("/project").await
}

/// `GET /project/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn get(id: &str) -> Result<Project, ApiError> {
    api::get_json(&format!("/project/{id}")).await
}

/// `POST /project` — submit a new request.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn create(project: &NewProject) -> Result<Project, ApiError> {
    api::post_json("/project", project).await
}

/// `PUT /project/{id}` carrying only a status transition. Covers both the
/// admin lifecycle moves and the professor's finalization acknowledgement.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn update_status(id: &str, status: ProjectStatus) -> Result<Project, ApiError> {
    api::put_json(
        &format!("/project/{id}"),
        &serde_json::json!({ "status": status }),
    )
    .await
}

/// `DELETE /project/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failures.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/project/{id}")).await
}
