//! HTTP routes
//!
//! Thin actix-web bindings over [`super::handlers`].

use super::handlers;
use super::middleware::{AuthGate, current_user};
use super::request::ActixRequest;
use super::state::AppState;
use actix_web::{HttpRequest, HttpResponse, web};
use std::collections::HashMap;

type FormData = Option<web::Form<HashMap<String, String>>>;

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/users", web::post().to(register_user))
        .service(
            web::resource("/sessions")
                .route(web::post().to(login))
                .route(web::delete().to(logout)),
        )
        .route("/profile", web::get().to(profile))
        .service(
            web::resource("/reset_password")
                .route(web::post().to(reset_password_token))
                .route(web::put().to(update_password)),
        )
        .service(
            web::scope("/api/v1")
                .wrap(AuthGate)
                .route("/status", web::get().to(status))
                .route("/unauthorized", web::get().to(unauthorized))
                .route("/forbidden", web::get().to(forbidden))
                .route("/users/me", web::get().to(users_me))
                .route("/auth_session/login", web::post().to(session_login))
                .route("/auth_session/logout", web::delete().to(session_logout)),
        );
}

async fn index() -> HttpResponse {
    handlers::index().await.into_http_response()
}

async fn register_user(state: web::Data<AppState>, req: HttpRequest, form: FormData) -> HttpResponse {
    let form = form.map(web::Form::into_inner);
    let request = ActixRequest::with_form(&req, form.as_ref());
    handlers::register_user(&state.auth, &request)
        .await
        .into_http_response()
}

async fn login(state: web::Data<AppState>, req: HttpRequest, form: FormData) -> HttpResponse {
    let form = form.map(web::Form::into_inner);
    let request = ActixRequest::with_form(&req, form.as_ref());
    handlers::login(&state.auth, &request).await.into_http_response()
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    handlers::logout(&state.auth, &ActixRequest::new(&req))
        .await
        .into_http_response()
}

async fn profile(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    handlers::profile(&state.auth, &ActixRequest::new(&req))
        .await
        .into_http_response()
}

async fn reset_password_token(state: web::Data<AppState>, req: HttpRequest, form: FormData) -> HttpResponse {
    let form = form.map(web::Form::into_inner);
    let request = ActixRequest::with_form(&req, form.as_ref());
    handlers::reset_password_token(&state.auth, &request)
        .await
        .into_http_response()
}

async fn update_password(state: web::Data<AppState>, req: HttpRequest, form: FormData) -> HttpResponse {
    let form = form.map(web::Form::into_inner);
    let request = ActixRequest::with_form(&req, form.as_ref());
    handlers::update_password(&state.auth, &request)
        .await
        .into_http_response()
}

async fn status() -> HttpResponse {
    handlers::status().await.into_http_response()
}

async fn unauthorized() -> HttpResponse {
    handlers::unauthorized().await.into_http_response()
}

async fn forbidden() -> HttpResponse {
    handlers::forbidden().await.into_http_response()
}

async fn users_me(req: HttpRequest) -> HttpResponse {
    let user = current_user(&req);
    handlers::current_user(user.as_ref())
        .await
        .into_http_response()
}

async fn session_login(state: web::Data<AppState>, req: HttpRequest, form: FormData) -> HttpResponse {
    let form = form.map(web::Form::into_inner);
    let request = ActixRequest::with_form(&req, form.as_ref());
    handlers::session_login(&state.auth, &request)
        .await
        .into_http_response()
}

async fn session_logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    handlers::session_logout(&state.auth, &ActixRequest::new(&req))
        .await
        .into_http_response()
}
