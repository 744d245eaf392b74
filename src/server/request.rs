//! Framework-neutral request and response types
//!
//! Handlers only see [`AuthRequest`] and produce [`AuthResponse`], so the
//! same logic runs behind actix-web and in plain unit tests.

use crate::utils::error::AuthError;
use actix_web::HttpRequest;
use actix_web::ResponseError;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Read access to the parts of a request authentication cares about
pub trait AuthRequest {
    fn path(&self) -> String;

    fn header(&self, name: &str) -> Option<String>;

    fn cookie(&self, name: &str) -> Option<String>;

    fn form_field(&self, name: &str) -> Option<String>;
}

/// Owned request built by hand
#[derive(Debug, Clone, Default)]
pub struct PlainRequest {
    path: String,
    headers: HashMap<String, String>,
    cookies: HashMap<String, String>,
    form: HashMap<String, String>,
}

impl PlainRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Header names are matched case-insensitively
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }
}

impl AuthRequest for PlainRequest {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_ascii_lowercase()).cloned()
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn form_field(&self, name: &str) -> Option<String> {
        self.form.get(name).cloned()
    }
}

/// Borrowed view over an actix request and its decoded form body
pub struct ActixRequest<'a> {
    request: &'a HttpRequest,
    form: Option<&'a HashMap<String, String>>,
}

impl<'a> ActixRequest<'a> {
    pub fn new(request: &'a HttpRequest) -> Self {
        Self { request, form: None }
    }

    pub fn with_form(request: &'a HttpRequest, form: Option<&'a HashMap<String, String>>) -> Self {
        Self { request, form }
    }
}

impl AuthRequest for ActixRequest<'_> {
    fn path(&self) -> String {
        self.request.path().to_string()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.request
            .cookie(name)
            .map(|cookie| cookie.value().to_string())
    }

    fn form_field(&self, name: &str) -> Option<String> {
        self.form.and_then(|form| form.get(name)).cloned()
    }
}

/// Cookie to set (or clear) on the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub clear: bool,
}

/// Handler result independent of the HTTP framework
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub status: u16,
    pub body: Value,
    pub set_cookie: Option<SetCookie>,
    pub location: Option<String>,
}

impl AuthResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            set_cookie: None,
            location: None,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// `{"error": message}` with the given status
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    pub fn unauthorized() -> Self {
        Self::error(401, "Unauthorized")
    }

    pub fn forbidden() -> Self {
        Self::error(403, "Forbidden")
    }

    pub fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    /// 302 to `location`
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            body: Value::Null,
            set_cookie: None,
            location: Some(location.into()),
        }
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_cookie = Some(SetCookie {
            name: name.into(),
            value: value.into(),
            clear: false,
        });
        self
    }

    pub fn clearing_cookie(mut self, name: impl Into<String>) -> Self {
        self.set_cookie = Some(SetCookie {
            name: name.into(),
            value: String::new(),
            clear: true,
        });
        self
    }

    /// Response for a service error, using the same status and body as its
    /// `ResponseError` mapping
    pub fn from_error(error: &AuthError) -> Self {
        Self::error(error.status_code().as_u16(), error.public_message())
    }

    pub fn into_http_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = HttpResponseBuilder::new(status);

        if let Some(set_cookie) = self.set_cookie {
            let mut cookie = Cookie::build(set_cookie.name, set_cookie.value)
                .path("/")
                .http_only(true)
                .finish();
            if set_cookie.clear {
                cookie.make_removal();
            }
            builder.cookie(cookie);
        }

        if let Some(location) = self.location {
            builder.insert_header((header::LOCATION, location));
        }

        if self.body.is_null() {
            builder.finish()
        } else {
            builder.json(self.body)
        }
    }
}
