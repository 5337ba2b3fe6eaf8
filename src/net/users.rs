//! User boundary: professor and administrator accounts.

use super::api::{self, ApiError};
use super::types::{User, UserUpdate};

/// `GET /professor`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn list_professors() -> Result<Vec<User>, ApiError> {
    api::get_json("/professor").await
}

/// `GET /professor/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn get_professor(id: &str) -> Result<User, ApiError> {
    api::get_json(&format!("/professor/{id}")).await
}

/// `PUT /professor/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn update_professor(id: &str, update: &UserUpdate) -> Result<User, ApiError> {
    api::put_json(&format!("/professor/{id}"), update).await
}

/// `DELETE /professor/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failures.
pub async fn delete_professor(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/professor/{id}")).await
}

/// `GET /adm`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn list_admins() -> Result<Vec<User>, ApiError> {
    api::get_json("/adm").await
}

/// `GET /adm/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn get_admin(id: &str) -> Result<User, ApiError> {
    api::get_json(&format!("/adm/{id}")).await
}

/// `PUT /adm/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn update_admin(id: &str, update: &UserUpdate) -> Result<User, ApiError> {
    api::put_json(&format!("/adm/{id}"), update).await
}

/// `DELETE /adm/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failures.
pub async fn delete_admin(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/adm/{id}")).await
}
