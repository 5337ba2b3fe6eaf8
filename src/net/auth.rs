//! Auth boundary: login and account registration.

use super::api::{self, ApiError};
use super::types::{AuthResponse, LoginCredentials, RegisterAdmin, RegisterProfessor, Role};

/// `POST /auth/login` for both professors and administrators.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for rejected credentials, or any
/// other [`ApiError`] on transport/decoding failures.
pub async fn login(login: &str, password: &str) -> Result<AuthResponse, ApiError> {
    api::post_json(
        "/auth/login",
        &LoginCredentials {
            login: login.to_owned(),
            password: password.to_owned(),
        },
    )
    .await
}

/// `POST /auth/register/professor`. Used by the public self-registration
/// page (with nome/escola) and the admin registration screen (without).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn register_professor(
    login: &str,
    password: &str,
    nome: Option<&str>,
    escola: Option<&str>,
) -> Result<AuthResponse, ApiError> {
    api::post_json(
        "/auth/register/professor",
        &RegisterProfessor {
            login: login.to_owned(),
            password: password.to_owned(),
            nome: nome.map(str::to_owned),
            escola: escola.map(str::to_owned),
            role: Role::Professor,
        },
    )
    .await
}

/// `POST /auth/register/adm`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub async fn register_admin(
    login: &str,
    password: &str,
    nome: Option<&str>,
) -> Result<AuthResponse, ApiError> {
    api::post_json(
        "/auth/register/adm",
        &RegisterAdmin {
            login: login.to_owned(),
            password: password.to_owned(),
            nome: nome.map(str::to_owned),
            role: Role::Administrador,
        },
    )
    .await
}
