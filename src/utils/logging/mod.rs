//! Logging utilities
//!
//! PII redaction for log lines and the `tracing` subscriber setup that
//! applies it to every event.

pub mod formatter;
pub mod redaction;


pub use formatter::{RedactingFormatter, init_logging};
pub use redaction::{DEFAULT_PII_FIELDS, RedactionSpec, redact};
