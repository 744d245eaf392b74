//! HTTP server implementation
//!
//! Framework-neutral request types and handlers, the actix-web routes and
//! gate middleware that bind them, and the server bootstrap.

pub mod builder;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod routes;
pub mod server;
pub mod state;


pub use request::{ActixRequest, AuthRequest, AuthResponse, PlainRequest, SetCookie};
pub use server::HttpServer;
pub use state::AppState;
