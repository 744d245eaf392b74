//! Field-level redaction of delimited `key=value` log lines

use crate::utils::error::{AuthError, Result};
use regex::Regex;

/// Fields masked when no explicit list is configured
pub const DEFAULT_PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Default replacement for redacted values
pub const DEFAULT_MARKER: &str = "***";

/// Default segment separator
pub const DEFAULT_SEPARATOR: &str = ";";

/// Mask the values of `fields` in a `separator`-delimited message.
///
/// Each segment of the form `key=value` whose key, ignoring surrounding
/// whitespace, is exactly one of `fields` has its value replaced by `marker`.
/// The key text is written back untouched. Segments without `=` pass through,
/// empty segments are dropped, and a trailing separator survives only if the
/// input had one.
pub fn redact<S: AsRef<str>>(fields: &[S], marker: &str, message: &str, separator: &str) -> String {
    redact_with(
        |key| fields.iter().any(|f| f.as_ref() == key),
        marker,
        message,
        separator,
    )
}

fn redact_with<F>(is_field: F, marker: &str, message: &str, separator: &str) -> String
where
    F: Fn(&str) -> bool,
{
    if separator.is_empty() {
        return message.to_string();
    }

    let mut out = message
        .split(separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, _)) if is_field(key.trim()) => format!("{}={}", key, marker),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join(separator);

    if message.ends_with(separator) {
        out.push_str(separator);
    }
    out
}

/// Precompiled redaction settings for a log formatter
#[derive(Debug, Clone)]
pub struct RedactionSpec {
    fields: Vec<String>,
    marker: String,
    separator: String,
    matcher: Option<Regex>,
}

impl Default for RedactionSpec {
    fn default() -> Self {
        let fields: Vec<String> = DEFAULT_PII_FIELDS.iter().map(|f| f.to_string()).collect();
        Self {
            matcher: build_matcher(&fields).ok().flatten(),
            fields,
            marker: DEFAULT_MARKER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RedactionSpec {
    /// Create a new redaction spec.
    ///
    /// Fails when the separator is empty or the marker contains it, since the
    /// redacted output would no longer split back into the same segments.
    pub fn new<I, S>(fields: I, marker: impl Into<String>, separator: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let marker = marker.into();
        let separator = separator.into();

        if separator.is_empty() {
            return Err(AuthError::config("Log separator must not be empty"));
        }
        if marker.contains(&separator) {
            return Err(AuthError::config(format!(
                "Redaction marker '{}' contains the separator '{}'",
                marker, separator
            )));
        }

        let matcher = build_matcher(&fields)?;
        Ok(Self {
            fields,
            marker,
            separator,
            matcher,
        })
    }

    /// Redact a message
    pub fn redact(&self, message: &str) -> String {
        match &self.matcher {
            Some(matcher) => redact_with(|key| matcher.is_match(key), &self.marker, message, &self.separator),
            None => redact_with(|_| false, &self.marker, message, &self.separator),
        }
    }

    /// Whether `key` names a redacted field
    pub fn is_field(&self, key: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(key.trim()))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

fn build_matcher(fields: &[String]) -> Result<Option<Regex>> {
    if fields.is_empty() {
        return Ok(None);
    }

    let alternation = fields
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("^(?:{})$", alternation))
        .map(Some)
        .map_err(|e| AuthError::config(format!("Invalid PII field list: {}", e)))
}
