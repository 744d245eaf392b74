//! Registration, login, session and password reset flows

use crate::common::ServiceFactory;
use chrono::Duration;
use userauth_rs::auth::{AuthService, basic_credentials};
use userauth_rs::auth::extractor::basic_authorization;
use userauth_rs::server::PlainRequest;
use userauth_rs::utils::error::AuthError;

async fn full_flow(service: &AuthService) {
    let user = service.register("alice@example.com", "secret1").await.unwrap();
    assert_ne!(user.hashed_password, "secret1");

    let dup = service.register("alice@example.com", "other").await;
    assert!(matches!(dup, Err(AuthError::AlreadyExists(_))));

    assert!(service.login("alice@example.com", "secret1").await);
    assert!(!service.login("alice@example.com", "secret2").await);
    assert!(!service.login("nobody@example.com", "secret1").await);

    let session_id = service.create_session("alice@example.com").await.unwrap();
    assert_eq!(session_id.len(), 36);
    let resolved = service.resolve_session(&session_id).await.unwrap();
    assert_eq!(resolved.email, "alice@example.com");
    assert_eq!(resolved.session_id.as_deref(), Some(session_id.as_str()));

    // A second login replaces the first session
    let second = service.create_session("alice@example.com").await.unwrap();
    assert_ne!(second, session_id);
    assert!(service.resolve_session(&session_id).await.is_none());
    assert!(service.resolve_session(&second).await.is_some());

    // Reset forces a logout and consumes the token
    let token = service.issue_reset_token("alice@example.com").await.unwrap();
    service.reset_password(&token, "secret2").await.unwrap();
    assert!(service.resolve_session(&second).await.is_none());
    assert!(service.login("alice@example.com", "secret2").await);
    assert!(!service.login("alice@example.com", "secret1").await);
    assert!(service.reset_password(&token, "secret3").await.is_err());

    let unknown = service.issue_reset_token("nobody@example.com").await;
    assert!(matches!(unknown, Err(AuthError::NotFound(_))));
}

#[tokio::test]
async fn test_full_flow_in_memory() {
    full_flow(&ServiceFactory::memory()).await;
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_full_flow_sqlite() {
    full_flow(&ServiceFactory::sqlite().await).await;
}

#[tokio::test]
async fn test_session_expires_after_ttl() {
    let (service, clock) = ServiceFactory::with_clock(60);
    service.register("alice@example.com", "secret1").await.unwrap();

    let session_id = service.create_session("alice@example.com").await.unwrap();
    assert!(service.resolve_session(&session_id).await.is_some());

    // The boundary itself is still live
    clock.advance(Duration::seconds(60));
    assert!(service.resolve_session(&session_id).await.is_some());

    clock.advance(Duration::seconds(1));
    assert!(service.resolve_session(&session_id).await.is_none());
    assert!(!service.sessions().contains(&session_id));
}

#[tokio::test]
async fn test_session_without_ttl_never_expires() {
    let (service, clock) = ServiceFactory::with_clock(0);
    service.register("alice@example.com", "secret1").await.unwrap();

    let session_id = service.create_session("alice@example.com").await.unwrap();
    clock.advance(Duration::days(365));
    assert!(service.resolve_session(&session_id).await.is_some());
}

#[tokio::test]
async fn test_logout_ends_session() {
    let service = ServiceFactory::memory();
    let user = service.register("bob@example.com", "pw").await.unwrap();
    let session_id = service.create_session("bob@example.com").await.unwrap();

    assert!(service.end_session(&session_id).await);
    assert!(!service.end_session(&session_id).await);
    assert!(service.resolve_session(&session_id).await.is_none());

    // Destroying again, or for an unknown user, is harmless
    service.destroy_session(&user.id).await;
    service.destroy_session("no-such-user").await;
    service.destroy_session("").await;
}

#[tokio::test]
async fn test_basic_header_identifies_user() {
    let service = ServiceFactory::memory();
    service.register("bob@hbtn.io", "H0lberton:School:98!").await.unwrap();

    let header = basic_authorization("bob@hbtn.io", "H0lberton:School:98!");
    assert_eq!(
        basic_credentials(Some(&header)),
        Some(("bob@hbtn.io".to_string(), "H0lberton:School:98!".to_string()))
    );

    let user = service
        .user_from_credentials("bob@hbtn.io", "H0lberton:School:98!")
        .await
        .unwrap();
    assert_eq!(user.email, "bob@hbtn.io");
    assert!(service.user_from_credentials("bob@hbtn.io", "H0lberton").await.is_none());
}

#[tokio::test]
async fn test_current_user_from_cookie() {
    let service = ServiceFactory::memory();
    service.register("bob@example.com", "pw").await.unwrap();
    let session_id = service.create_session("bob@example.com").await.unwrap();

    let request = PlainRequest::new("/api/v1/users/me").with_cookie(service.session_name(), session_id);
    let user = service.current_user(&request).await.unwrap();
    assert_eq!(user.email, "bob@example.com");

    let anonymous = PlainRequest::new("/api/v1/users/me");
    assert!(service.current_user(&anonymous).await.is_none());
    assert!(!service.has_credentials(&anonymous));
}
