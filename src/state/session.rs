#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::Utc;
use leptos::prelude::{RwSignal, Set};
use thiserror::Error;

use crate::auth::claims::{Claims, ClaimsError};
use crate::auth::token_store;
use crate::net;
use crate::net::api::ApiError;
use crate::net::types::Role;

/// Identity derived from a valid credential. Exists only while the
/// credential is held; never persisted on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub login: String,
    pub role: Role,
}

/// The client's view of who is signed in.
///
/// An explicit tagged union instead of a `user`/`loading` pair: there is
/// no representable state where loading is finished but the identity is
/// both present and ignored.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    /// Initial decode of the stored credential has not finished yet.
    #[default]
    Initializing,
    /// A login call is in flight.
    LoggingIn,
    Authenticated(Identity),
    Unauthenticated,
}

impl Session {
    /// Whether consumers should show a neutral waiting indicator instead
    /// of deciding between content and redirect.
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Initializing | Session::LoggingIn)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The backend accepted the credentials but returned a token this
    /// client cannot derive an identity from.
    #[error("login returned an unusable credential")]
    InvalidToken,
}

/// Settle a session from a stored credential, pure in `token` and `now`.
///
/// Absent, expired, corrupt, or unknown-role credentials all settle
/// `Unauthenticated`; the caller is responsible for clearing storage in
/// that case.
pub fn settle_from_token(token: Option<&str>, now: i64) -> Session {
    let Some(token) = token else {
        return Session::Unauthenticated;
    };
    match Claims::decode(token) {
        Ok(claims) if claims.is_valid(now) => match identity_from(&claims) {
            Ok(identity) => Session::Authenticated(identity),
            Err(err) => {
                log::warn!("stored credential rejected: {err}");
                Session::Unauthenticated
            }
        },
        Ok(_) => {
            log::debug!("stored credential expired");
            Session::Unauthenticated
        }
        Err(err) => {
            log::warn!("stored credential undecodable: {err}");
            Session::Unauthenticated
        }
    }
}

fn identity_from(claims: &Claims) -> Result<Identity, ClaimsError> {
    Ok(Identity {
        id: claims.sub.clone(),
        login: claims.login.clone(),
        role: claims.role()?,
    })
}

/// Resolve the stored credential on mount and settle the session.
///
/// A credential that does not yield an identity is treated as absent:
/// storage is cleared so the next load starts clean.
pub fn initialize(session: RwSignal<Session>) {
    let settled = settle_from_token(token_store::get().as_deref(), Utc::now().timestamp());
    if !matches!(settled, Session::Authenticated(_)) {
        token_store::clear();
    }
    log::debug!("session initialized: {settled:?}");
    session.set(settled);
}

/// Authenticate against the backend and settle the session.
///
/// On success the returned token is stored and the derived identity
/// published. On any failure — transport, rejected credentials, or an
/// undecodable token — any partially written token is cleared, the
/// session settles `Unauthenticated`, and the error propagates. The
/// session is never left with a stored token and no identity.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] or [`LoginError::InvalidToken`].
pub async fn login(
    session: RwSignal<Session>,
    login: &str,
    password: &str,
) -> Result<Identity, LoginError> {
    session.set(Session::LoggingIn);
    match attempt_login(login, password).await {
        Ok(identity) => {
            log::debug!("login succeeded for {login}");
            session.set(Session::Authenticated(identity.clone()));
            Ok(identity)
        }
        Err(err) => {
            log::warn!("login failed for {login}: {err}");
            token_store::clear();
            session.set(Session::Unauthenticated);
            Err(err)
        }
    }
}

async fn attempt_login(login: &str, password: &str) -> Result<Identity, LoginError> {
    let response = net::auth::login(login, password).await?;
    token_store::set(&response.token);
    match settle_from_token(Some(&response.token), Utc::now().timestamp()) {
        Session::Authenticated(identity) => Ok(identity),
        _ => Err(LoginError::InvalidToken),
    }
}

/// Clear the stored credential and settle `Unauthenticated`. Synchronous;
/// always succeeds.
pub fn logout(session: RwSignal<Session>) {
    token_store::clear();
    session.set(Session::Unauthenticated);
    log::debug!("session logged out");
}
