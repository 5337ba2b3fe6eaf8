use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const NOW: i64 = 1_700_000_000;

fn token(sub: &str, login: &str, role: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(&serde_json::json!({
            "sub": sub,
            "login": login,
            "role": role,
            "exp": exp,
        }))
        .expect("payload json"),
    );
    format!("{header}.{payload}.sig")
}

// =============================================================
// Session shape
// =============================================================

#[test]
fn session_default_is_initializing() {
    assert_eq!(Session::default(), Session::Initializing);
}

#[test]
fn loading_states_are_initializing_and_logging_in() {
    assert!(Session::Initializing.is_loading());
    assert!(Session::LoggingIn.is_loading());
    assert!(!Session::Unauthenticated.is_loading());
    let identity = Identity {
        id: "u-1".to_owned(),
        login: "ana".to_owned(),
        role: Role::Professor,
    };
    assert!(!Session::Authenticated(identity).is_loading());
}

#[test]
fn identity_is_only_exposed_when_authenticated() {
    assert!(Session::Initializing.identity().is_none());
    assert!(Session::Unauthenticated.identity().is_none());
}

// =============================================================
// settle_from_token
// =============================================================

#[test]
fn no_token_settles_unauthenticated() {
    assert_eq!(settle_from_token(None, NOW), Session::Unauthenticated);
}

#[test]
fn valid_token_settles_authenticated() {
    let token = token("u-7", "ana", "PROFESSOR", NOW + 3600);
    let session = settle_from_token(Some(&token), NOW);
    let identity = session.identity().expect("authenticated");
    assert_eq!(identity.id, "u-7");
    assert_eq!(identity.login, "ana");
    assert_eq!(identity.role, Role::Professor);
}

#[test]
fn prefixed_admin_role_settles_with_normalized_role() {
    let token = token("u-1", "root", "ROLE_ADMINISTRADOR", NOW + 3600);
    let session = settle_from_token(Some(&token), NOW);
    assert_eq!(
        session.identity().expect("authenticated").role,
        Role::Administrador
    );
}

#[test]
fn expired_token_settles_unauthenticated() {
    let token = token("u-1", "ana", "PROFESSOR", NOW);
    assert_eq!(settle_from_token(Some(&token), NOW), Session::Unauthenticated);
}

#[test]
fn corrupt_token_settles_unauthenticated() {
    assert_eq!(
        settle_from_token(Some("garbage"), NOW),
        Session::Unauthenticated
    );
}

#[test]
fn unknown_role_settles_unauthenticated() {
    let token = token("u-1", "ana", "ROLE_ALUNO", NOW + 3600);
    assert_eq!(settle_from_token(Some(&token), NOW), Session::Unauthenticated);
}
