//! Configuration loading

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;
use userauth_rs::config::{AuthType, Config};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_env_selects_session_expiry() {
    let config = Config::from_lookup(lookup(&[
        ("AUTH_TYPE", "session_exp_auth"),
        ("SESSION_NAME", "_my_session_id"),
        ("SESSION_DURATION", "60"),
    ]))
    .unwrap();

    assert_eq!(config.auth.auth_type, AuthType::SessionExpAuth);
    assert_eq!(config.auth.session_name, "_my_session_id");
    assert_eq!(config.auth.session_ttl(), 60);
}

#[test]
fn test_plain_session_auth_ignores_duration() {
    let config = Config::from_lookup(lookup(&[
        ("AUTH_TYPE", "session_auth"),
        ("SESSION_DURATION", "60"),
    ]))
    .unwrap();
    assert_eq!(config.auth.session_ttl(), 0);
}

#[test]
fn test_unknown_auth_type_is_rejected() {
    assert!(Config::from_lookup(lookup(&[("AUTH_TYPE", "kerberos")])).is_err());
}

#[tokio::test]
async fn test_yaml_file_round_trip() {
    let mut config = Config::default();
    config.auth.auth_type = AuthType::BasicAuth;
    config.server.port = 8080;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

    let loaded = Config::from_file(file.path()).await.unwrap();
    assert_eq!(loaded.auth.auth_type, AuthType::BasicAuth);
    assert_eq!(loaded.server.port, 8080);
}
