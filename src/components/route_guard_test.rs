use super::*;
use crate::state::session::Identity;

fn authenticated(role: Role) -> Session {
    Session::Authenticated(Identity {
        id: "u-1".to_owned(),
        login: "ana".to_owned(),
        role,
    })
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_sessions_wait_without_redirecting() {
    assert_eq!(
        evaluate(&Session::Initializing, routing::PROFESSOR_ONLY),
        GuardOutcome::Wait
    );
    assert_eq!(
        evaluate(&Session::LoggingIn, routing::ADMIN_ONLY),
        GuardOutcome::Wait
    );
}

#[test]
fn unauthenticated_sessions_go_to_login() {
    assert_eq!(
        evaluate(&Session::Unauthenticated, routing::PROFESSOR_ONLY),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(
        evaluate(&authenticated(Role::Professor), routing::PROFESSOR_ONLY),
        GuardOutcome::Allow
    );
    assert_eq!(
        evaluate(&authenticated(Role::Administrador), routing::ADMIN_ONLY),
        GuardOutcome::Allow
    );
}

#[test]
fn empty_role_set_admits_any_authenticated_user() {
    assert_eq!(evaluate(&authenticated(Role::Professor), &[]), GuardOutcome::Allow);
    assert_eq!(
        evaluate(&authenticated(Role::Administrador), &[]),
        GuardOutcome::Allow
    );
}

#[test]
fn professor_on_admin_route_is_sent_to_professor_home() {
    assert_eq!(
        evaluate(&authenticated(Role::Professor), routing::ADMIN_ONLY),
        GuardOutcome::RedirectTo(paths::PROFESSOR_DASHBOARD)
    );
}

#[test]
fn admin_on_professor_route_is_sent_to_admin_home() {
    assert_eq!(
        evaluate(&authenticated(Role::Administrador), routing::PROFESSOR_ONLY),
        GuardOutcome::RedirectTo(paths::ADMIN_DASHBOARD)
    );
}

#[test]
fn evaluate_is_idempotent() {
    let session = authenticated(Role::Professor);
    assert_eq!(
        evaluate(&session, routing::ADMIN_ONLY),
        evaluate(&session, routing::ADMIN_ONLY)
    );
}
