#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

use crate::net::types::Role;

/// Claim set embedded in the backend-issued credential.
///
/// The role arrives as a raw string because the issuing backend may prefix
/// it with a `ROLE_` marker; [`Claims::role`] normalizes it against the
/// closed [`Role`] set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub login: String,
    pub role: String,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("malformed token")]
    TokenFormat,
    #[error("invalid base64url payload")]
    Base64,
    #[error("invalid claims json: {0}")]
    Json(String),
    #[error("unrecognized role claim: {0}")]
    UnknownRole(String),
}

impl Claims {
    /// Decode the payload segment of a three-part token.
    ///
    /// The signature is not verified; the backend owns signing. A token
    /// that is not shaped `header.payload.signature`, or whose payload is
    /// not base64url-encoded JSON carrying the expected claims, is an
    /// error — never a panic.
    ///
    /// # Errors
    ///
    /// Returns `TokenFormat`, `Base64`, or `Json` depending on which layer
    /// of the encoding is broken.
    pub fn decode(token: &str) -> Result<Claims, ClaimsError> {
        let mut parts = token.split('.');
        let _header = parts.next().ok_or(ClaimsError::TokenFormat)?;
        let payload = parts.next().ok_or(ClaimsError::TokenFormat)?;
        let _signature = parts.next().ok_or(ClaimsError::TokenFormat)?;
        if parts.next().is_some() {
            return Err(ClaimsError::TokenFormat);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| ClaimsError::Base64)?;
        serde_json::from_slice(&bytes).map_err(|err| ClaimsError::Json(err.to_string()))
    }

    /// Whether the credential is still usable at `now` (seconds since
    /// epoch). A token exactly at its expiry instant is already invalid.
    pub fn is_valid(&self, now: i64) -> bool {
        self.exp > now
    }

    /// Normalized role: strips the issuer's `ROLE_` prefix artifact and
    /// matches against the closed role set.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRole` when the claim is outside the closed set even
    /// after normalization.
    pub fn role(&self) -> Result<Role, ClaimsError> {
        let normalized = self.role.strip_prefix("ROLE_").unwrap_or(&self.role);
        Role::parse(normalized).ok_or_else(|| ClaimsError::UnknownRole(self.role.clone()))
    }
}
