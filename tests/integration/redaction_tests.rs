//! Log redaction through the public API

use userauth_rs::config::{Config, LogFormat};
use userauth_rs::utils::logging::{RedactingFormatter, RedactionSpec, redact};

#[test]
fn test_redact_user_record() {
    let message = "name=Bob;email=bob@dylan.com;phone=(555) 123-4567;ssn=123-45-6789;password=s3cr3t;ip=10.0.0.1;";
    let spec = RedactionSpec::default();
    assert_eq!(
        spec.redact(message),
        "name=***;email=***;phone=***;ssn=***;password=***;ip=10.0.0.1;"
    );

    // The free function agrees with the precompiled matcher
    assert_eq!(
        redact(&["name", "email", "phone", "ssn", "password"], "***", message, ";"),
        spec.redact(message)
    );
}

#[test]
fn test_spec_from_logging_config() {
    let mut config = Config::default();
    config.logging.pii_fields = vec!["token".to_string()];
    config.logging.redaction = "[hidden]".to_string();
    config.logging.separator = "|".to_string();
    config.logging.format = LogFormat::Json;

    let spec = RedactionSpec::new(
        config.logging.pii_fields.clone(),
        config.logging.redaction.clone(),
        config.logging.separator.clone(),
    )
    .unwrap();
    assert_eq!(spec.redact("user=bob|token=abc"), "user=bob|token=[hidden]");

    let formatter = RedactingFormatter::new(spec).with_format(config.logging.format);
    assert!(formatter.spec().is_field("token"));
}

#[test]
fn test_spec_rejects_ambiguous_settings() {
    assert!(RedactionSpec::new(["name"], "***", "").is_err());
    assert!(RedactionSpec::new(["name"], "a;b", ";").is_err());
}
