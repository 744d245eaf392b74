//! Authentication gate middleware

use super::handlers::authorize;
use super::request::ActixRequest;
use super::state::AppState;
use crate::core::models::User;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::error;

/// Authenticated caller attached to the request by [`AuthGate`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Read the caller attached by [`AuthGate`]
pub fn current_user(req: &HttpRequest) -> Option<User> {
    req.extensions().get::<CurrentUser>().map(|current| current.0.clone())
}

/// Rejects requests to guarded paths that carry no valid credentials
pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for the auth gate
pub struct AuthGateService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                error!("Application state missing, auth gate cannot run");
                let response = req.into_response(
                    super::request::AuthResponse::json(
                        500,
                        serde_json::json!({ "error": "Internal server error" }),
                    )
                    .into_http_response(),
                );
                return Ok(response.map_into_right_body());
            };

            let outcome = {
                let request = ActixRequest::new(req.request());
                authorize(&state.auth, &request).await
            };

            match outcome {
                Ok(Some(user)) => {
                    req.extensions_mut().insert(CurrentUser(user));
                }
                Ok(None) => {}
                Err(rejection) => {
                    let response = req.into_response(rejection.into_http_response());
                    return Ok(response.map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
