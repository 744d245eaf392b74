//! Path exemption rules

use userauth_rs::auth::{PathAuthGate, requires_auth};

fn excluded() -> Vec<String> {
    vec![
        "/api/v1/status/".to_string(),
        "/api/v1/unauthorized/".to_string(),
        "/api/v1/forbidden/".to_string(),
        "/api/v1/auth_session/login/".to_string(),
    ]
}

#[test]
fn test_requires_auth_examples() {
    let excluded = excluded();
    let list = Some(excluded.as_slice());

    assert!(!requires_auth(Some("/api/v1/status"), list));
    assert!(!requires_auth(Some("/api/v1/status/"), list));
    assert!(requires_auth(Some("/api/v1/users"), list));
    assert!(!requires_auth(None, list));
    assert!(!requires_auth(Some("/api/v1/users"), None));
    assert!(requires_auth(Some("/api/v1/users"), Some(&[][..])));
}

#[test]
fn test_gate_with_glob() {
    let gate = PathAuthGate::new(["/api/v1/stat*", "/public/"]);

    assert!(!gate.requires(Some("/api/v1/stats")));
    assert!(!gate.requires(Some("/public/index.html")));
    assert!(gate.requires(Some("/api/v1/users/me")));
}
