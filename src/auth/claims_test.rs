use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

// Fixed reference instant so expiry assertions are stable.
const NOW: i64 = 1_700_000_000;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).expect("payload json"));
    format!("{header}.{body}.sig")
}

fn token(sub: &str, login: &str, role: &str, exp: i64) -> String {
    token_with_payload(&serde_json::json!({
        "sub": sub,
        "login": login,
        "role": role,
        "exp": exp,
    }))
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_extracts_claim_set() {
    let claims = Claims::decode(&token("u-1", "ana", "PROFESSOR", NOW + 3600)).expect("claims");
    assert_eq!(claims.sub, "u-1");
    assert_eq!(claims.login, "ana");
    assert_eq!(claims.role, "PROFESSOR");
    assert_eq!(claims.exp, NOW + 3600);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(
        Claims::decode("only.two"),
        Err(ClaimsError::TokenFormat)
    ));
    assert!(matches!(
        Claims::decode("a.b.c.d"),
        Err(ClaimsError::TokenFormat)
    ));
}

#[test]
fn decode_rejects_bad_base64_payload() {
    assert!(matches!(
        Claims::decode("header.%%%.sig"),
        Err(ClaimsError::Base64)
    ));
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json at all");
    let token = format!("header.{payload}.sig");
    assert!(matches!(Claims::decode(&token), Err(ClaimsError::Json(_))));
}

#[test]
fn decode_rejects_missing_role_claim() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "u-1",
        "login": "ana",
        "exp": NOW + 3600,
    }));
    assert!(matches!(Claims::decode(&token), Err(ClaimsError::Json(_))));
}

// =============================================================
// is_valid
// =============================================================

#[test]
fn future_expiry_is_valid() {
    let claims = Claims::decode(&token("u-1", "ana", "PROFESSOR", NOW + 1)).expect("claims");
    assert!(claims.is_valid(NOW));
}

#[test]
fn expiry_boundary_is_invalid() {
    let claims = Claims::decode(&token("u-1", "ana", "PROFESSOR", NOW)).expect("claims");
    assert!(!claims.is_valid(NOW));
}

#[test]
fn past_expiry_is_invalid() {
    let claims = Claims::decode(&token("u-1", "ana", "PROFESSOR", NOW - 3600)).expect("claims");
    assert!(!claims.is_valid(NOW));
}

// =============================================================
// role normalization
// =============================================================

#[test]
fn plain_role_is_recognized() {
    let claims = Claims::decode(&token("u-1", "ana", "PROFESSOR", NOW + 3600)).expect("claims");
    assert_eq!(claims.role().expect("role"), Role::Professor);
}

#[test]
fn prefixed_role_is_normalized() {
    let claims =
        Claims::decode(&token("u-1", "ana", "ROLE_ADMINISTRADOR", NOW + 3600)).expect("claims");
    assert_eq!(claims.role().expect("role"), Role::Administrador);
}

#[test]
fn unknown_role_is_an_error_not_a_default() {
    let claims = Claims::decode(&token("u-1", "ana", "ROLE_ALUNO", NOW + 3600)).expect("claims");
    assert!(matches!(claims.role(), Err(ClaimsError::UnknownRole(raw)) if raw == "ROLE_ALUNO"));
}

#[test]
fn prefix_is_stripped_only_once() {
    let claims =
        Claims::decode(&token("u-1", "ana", "ROLE_ROLE_PROFESSOR", NOW + 3600)).expect("claims");
    assert!(claims.role().is_err());
}
