// Module declarations
mod connection;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
