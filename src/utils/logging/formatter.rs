//! Redacting `tracing` event formatter and subscriber setup

use super::redaction::RedactionSpec;
use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{AuthError, Result};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event formatter that masks PII before a line reaches the writer.
///
/// Text lines look like `{time} {LEVEL} {target}: {message}; k=v; ...` where
/// everything after the target is passed through the [`RedactionSpec`]. JSON
/// lines carry the redacted message and mask the value of any field whose
/// name is a PII field.
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    spec: RedactionSpec,
    format: LogFormat,
}

impl RedactingFormatter {
    pub fn new(spec: RedactionSpec) -> Self {
        Self {
            spec,
            format: LogFormat::Text,
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn spec(&self) -> &RedactionSpec {
        &self.spec
    }

    fn render_text(&self, collector: &FieldCollector, header: &str) -> String {
        let separator = self.spec.separator();
        let mut body = collector.message.clone();
        for (key, value) in &collector.fields {
            if !body.is_empty() {
                body.push_str(separator);
                body.push(' ');
            }
            body.push_str(key);
            body.push('=');
            body.push_str(value);
        }
        format!("{}{}", header, self.spec.redact(&body))
    }

    fn render_json(&self, collector: &FieldCollector, time: &str, level: &str, target: &str) -> String {
        let fields: serde_json::Map<String, serde_json::Value> = collector
            .fields
            .iter()
            .map(|(key, value)| {
                let value = if self.spec.is_field(key) {
                    self.spec.marker().to_string()
                } else {
                    self.spec.redact(value)
                };
                (key.clone(), serde_json::Value::String(value))
            })
            .collect();

        serde_json::json!({
            "timestamp": time,
            "level": level,
            "target": target,
            "message": self.spec.redact(&collector.message),
            "fields": fields,
        })
        .to_string()
    }
}

impl<S, N> FormatEvent<S, N> for RedactingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let level = metadata.level().to_string();

        let line = match self.format {
            LogFormat::Text => {
                let header = format!("{} {} {}: ", time, level, metadata.target());
                self.render_text(&collector, &header)
            }
            LogFormat::Json => self.render_json(&collector, &time, &level, metadata.target()),
        };

        writeln!(writer, "{}", line)
    }
}

/// Collects an event's message and fields in recording order
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let spec = RedactionSpec::new(
        config.pii_fields.clone(),
        config.redaction.clone(),
        config.separator.clone(),
    )?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AuthError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(RedactingFormatter::new(spec).with_format(config.format))
        .try_init()
        .map_err(|e| AuthError::config(format!("Failed to install logger: {}", e)))
}
