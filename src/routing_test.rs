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
// resolve
// =============================================================

#[test]
fn resolve_waits_while_loading() {
    assert_eq!(resolve(&Session::Initializing), None);
    assert_eq!(resolve(&Session::LoggingIn), None);
}

#[test]
fn resolve_sends_unauthenticated_to_login() {
    assert_eq!(resolve(&Session::Unauthenticated), Some(paths::LOGIN));
}

#[test]
fn resolve_sends_each_role_home() {
    assert_eq!(
        resolve(&authenticated(Role::Administrador)),
        Some(paths::ADMIN_DASHBOARD)
    );
    assert_eq!(
        resolve(&authenticated(Role::Professor)),
        Some(paths::PROFESSOR_DASHBOARD)
    );
}

#[test]
fn resolve_is_pure() {
    let session = authenticated(Role::Administrador);
    assert_eq!(resolve(&session), resolve(&session));
}

// =============================================================
// home_for
// =============================================================

#[test]
fn home_for_maps_roles_to_dashboards() {
    assert_eq!(home_for(Role::Administrador), paths::ADMIN_DASHBOARD);
    assert_eq!(home_for(Role::Professor), paths::PROFESSOR_DASHBOARD);
}

// =============================================================
// sanitize_return_target
// =============================================================

#[test]
fn sanitize_accepts_absolute_paths() {
    assert_eq!(
        sanitize_return_target(Some("/my-projects".to_owned())),
        Some("/my-projects".to_owned())
    );
}

#[test]
fn sanitize_rejects_external_and_malformed_targets() {
    assert_eq!(sanitize_return_target(None), None);
    assert_eq!(sanitize_return_target(Some(String::new())), None);
    assert_eq!(
        sanitize_return_target(Some("https://evil.example".to_owned())),
        None
    );
    assert_eq!(sanitize_return_target(Some("//evil.example".to_owned())), None);
}
