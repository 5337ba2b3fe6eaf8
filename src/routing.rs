#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Client-visible route paths.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER_PROFESSOR: &str = "/register-professor";

    pub const PROFESSOR_DASHBOARD: &str = "/dashboard-professor";
    pub const SUBMIT_PROJECT: &str = "/submit-project";
    pub const MY_PROJECTS: &str = "/my-projects";

    pub const ADMIN_DASHBOARD: &str = "/dashboard-admin";
    pub const ADMIN_PROJECTS: &str = "/projects";
    pub const ADMIN_PROFESSORS: &str = "/professors";
    pub const ADMIN_GROUPS: &str = "/groups";
    pub const ADMIN_REGISTER_PROFESSOR: &str = "/register-professor-admin";
}

/// Role sets for the route guard.
pub const ADMIN_ONLY: &[Role] = &[Role::Administrador];
pub const PROFESSOR_ONLY: &[Role] = &[Role::Professor];

/// Home destination for a role, also used as the authorization-failure
/// fallback: a user on a route outside their role lands on their own
/// dashboard, never on an error page.
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Administrador => paths::ADMIN_DASHBOARD,
        Role::Professor => paths::PROFESSOR_DASHBOARD,
    }
}

/// Pure destination resolution for the application root and post-login.
///
/// `None` while the session is still loading — the caller keeps showing a
/// neutral indicator instead of navigating. Settled sessions always have
/// a destination: the login page when unauthenticated (fail closed), the
/// role's own dashboard otherwise.
pub fn resolve(session: &Session) -> Option<&'static str> {
    match session {
        Session::Initializing | Session::LoggingIn => None,
        Session::Unauthenticated => Some(paths::LOGIN),
        Session::Authenticated(identity) => Some(home_for(identity.role)),
    }
}

/// Validate a `?from=` return target captured by the route guard.
///
/// Only same-origin absolute paths are honored; anything else (external
/// URLs, scheme-relative `//host` forms, empty strings) is dropped so the
/// login page falls back to the role home.
pub fn sanitize_return_target(target: Option<String>) -> Option<String> {
    let target = target?;
    if target.starts_with('/') && !target.starts_with("//") {
        Some(target)
    } else {
        None
    }
}
