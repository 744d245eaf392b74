//! Route handlers
//!
//! Each handler reads an [`AuthRequest`] and returns an [`AuthResponse`];
//! the actix bindings live in [`super::routes`].

use super::request::{AuthRequest, AuthResponse};
use crate::auth::AuthService;
use crate::core::models::User;
use crate::utils::error::AuthError;
use serde_json::json;
use tracing::{error, info, warn};

/// Non-empty form field
fn field(request: &dyn AuthRequest, name: &str) -> Option<String> {
    request.form_field(name).filter(|value| !value.is_empty())
}

fn internal_error(e: &AuthError) -> AuthResponse {
    error!("Request failed: {}", e);
    AuthResponse::from_error(e)
}

/// Decide whether a request may reach a guarded route.
///
/// `Ok(None)` lets an exempt request through without an identity,
/// `Ok(Some(user))` carries the resolved caller. A request with neither an
/// `Authorization` header nor a session cookie gets 401; one whose
/// credentials do not resolve gets 403.
pub async fn authorize(auth: &AuthService, request: &dyn AuthRequest) -> Result<Option<User>, AuthResponse> {
    if !auth.enabled() || !auth.requires_auth(&request.path()) {
        return Ok(None);
    }

    if !auth.has_credentials(request) {
        return Err(AuthResponse::unauthorized());
    }

    match auth.current_user(request).await {
        Some(user) => Ok(Some(user)),
        None => {
            warn!(path = %request.path(), "Credentials did not resolve to a user");
            Err(AuthResponse::forbidden())
        }
    }
}

// ==================== User service ====================

/// `GET /`
pub async fn index() -> AuthResponse {
    AuthResponse::ok(json!({ "message": "Bienvenue" }))
}

/// `POST /users`
pub async fn register_user(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let (Some(email), Some(password)) = (field(request, "email"), field(request, "password")) else {
        return AuthResponse::json(400, json!({ "message": "email and password required" }));
    };

    match auth.register(&email, &password).await {
        Ok(user) => AuthResponse::ok(json!({ "email": user.email, "message": "user created" })),
        Err(AuthError::AlreadyExists(_)) => {
            AuthResponse::json(400, json!({ "message": "email already registered" }))
        }
        Err(e) => internal_error(&e),
    }
}

/// `POST /sessions`
pub async fn login(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let (Some(email), Some(password)) = (field(request, "email"), field(request, "password")) else {
        return AuthResponse::unauthorized();
    };

    if !auth.login(&email, &password).await {
        return AuthResponse::unauthorized();
    }

    match auth.create_session(&email).await {
        Some(session_id) => AuthResponse::ok(json!({ "email": email, "message": "logged in" }))
            .with_cookie(auth.session_name(), session_id),
        None => AuthResponse::unauthorized(),
    }
}

/// `DELETE /sessions`
pub async fn logout(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let Some(session_id) = request.cookie(auth.session_name()) else {
        return AuthResponse::forbidden();
    };
    let Some(user) = auth.resolve_session(&session_id).await else {
        return AuthResponse::forbidden();
    };

    auth.destroy_session(&user.id).await;
    info!(user_id = %user.id, "Logged out");
    AuthResponse::redirect("/").clearing_cookie(auth.session_name())
}

/// `GET /profile`
pub async fn profile(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let Some(session_id) = request.cookie(auth.session_name()) else {
        return AuthResponse::forbidden();
    };

    match auth.resolve_session(&session_id).await {
        Some(user) => AuthResponse::ok(json!({ "email": user.email })),
        None => AuthResponse::forbidden(),
    }
}

/// `POST /reset_password`
pub async fn reset_password_token(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let Some(email) = field(request, "email") else {
        return AuthResponse::forbidden();
    };

    match auth.issue_reset_token(&email).await {
        Ok(token) => AuthResponse::ok(json!({ "email": email, "reset_token": token })),
        Err(AuthError::NotFound(_)) => AuthResponse::forbidden(),
        Err(e) => internal_error(&e),
    }
}

/// `PUT /reset_password`
pub async fn update_password(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let email = request.form_field("email");
    let (Some(token), Some(new_password)) =
        (field(request, "reset_token"), field(request, "new_password"))
    else {
        return AuthResponse::forbidden();
    };

    match auth.reset_password(&token, &new_password).await {
        Ok(()) => AuthResponse::ok(json!({ "email": email, "message": "Password updated" })),
        Err(AuthError::NotFound(_)) => AuthResponse::forbidden(),
        Err(e) => internal_error(&e),
    }
}

// ==================== API v1 ====================

/// `GET /api/v1/status`
pub async fn status() -> AuthResponse {
    AuthResponse::ok(json!({ "status": "OK" }))
}

/// `GET /api/v1/unauthorized`
pub async fn unauthorized() -> AuthResponse {
    AuthResponse::unauthorized()
}

/// `GET /api/v1/forbidden`
pub async fn forbidden() -> AuthResponse {
    AuthResponse::forbidden()
}

/// `GET /api/v1/users/me`
pub async fn current_user(user: Option<&User>) -> AuthResponse {
    match user {
        Some(user) => AuthResponse::ok(json!(user)),
        None => AuthResponse::not_found(),
    }
}

/// `POST /api/v1/auth_session/login`
pub async fn session_login(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let Some(email) = field(request, "email") else {
        return AuthResponse::error(400, "email missing");
    };
    let Some(password) = field(request, "password") else {
        return AuthResponse::error(400, "password missing");
    };

    let Some(user) = auth.user_from_credentials(&email, &password).await else {
        return AuthResponse::unauthorized();
    };

    match auth.create_session(&user.email).await {
        Some(session_id) => AuthResponse::ok(json!(user)).with_cookie(auth.session_name(), session_id),
        None => AuthResponse::forbidden(),
    }
}

/// `DELETE /api/v1/auth_session/logout`
pub async fn session_logout(auth: &AuthService, request: &dyn AuthRequest) -> AuthResponse {
    let Some(session_id) = request.cookie(auth.session_name()) else {
        return AuthResponse::not_found();
    };

    if auth.end_session(&session_id).await {
        AuthResponse::ok(json!({})).clearing_cookie(auth.session_name())
    } else {
        AuthResponse::not_found()
    }
}
