//! Tests for error handling

#[cfg(test)]
mod tests {
    use super::super::types::AuthError;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;

    fn body_of(error: &AuthError) -> String {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap_or_default();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(AuthError::not_found("user"), AuthError::NotFound(msg) if msg == "user"));
        assert!(matches!(
            AuthError::already_exists("a@b.c"),
            AuthError::AlreadyExists(_)
        ));
        assert!(matches!(
            AuthError::invalid_credentials("bad"),
            AuthError::InvalidCredentials(_)
        ));
        assert!(matches!(AuthError::malformed("b64"), AuthError::Malformed(_)));
        assert!(matches!(AuthError::expired("session"), AuthError::Expired(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AuthError::not_found("no user").to_string(),
            "Not found: no user"
        );
        assert_eq!(
            AuthError::config("bad separator").to_string(),
            "Configuration error: bad separator"
        );
    }

    #[test]
    fn test_auth_failures_share_status_and_body() {
        let failures = [
            AuthError::not_found("user alice@example.com"),
            AuthError::invalid_credentials("wrong password"),
            AuthError::malformed("bad base64"),
            AuthError::expired("session"),
        ];

        for error in &failures {
            assert!(error.is_auth_failure());
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_of(error), r#"{"error":"Unauthorized"}"#);
        }
    }

    #[test]
    fn test_already_exists_is_explicit() {
        let error = AuthError::already_exists("alice@example.com");
        assert!(!error.is_auth_failure());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(&error), r#"{"error":"email already registered"}"#);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = AuthError::crypto("argon2 params rejected");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_of(&error).contains("argon2"));
    }
}
