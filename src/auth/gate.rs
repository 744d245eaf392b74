//! Path exemption rules for authenticated routes

use glob::Pattern;
use tracing::warn;

/// Decide whether `path` needs authentication given the exempt patterns.
///
/// A missing (or empty) path or a missing pattern list means no
/// authentication is required. Otherwise the path is exempt when it equals a
/// pattern, when either one is a prefix of the other, or when it matches the
/// pattern as a shell glob (case-sensitive, `*` also crosses `/`).
pub fn requires_auth(path: Option<&str>, excluded: Option<&[String]>) -> bool {
    let (Some(path), Some(excluded)) = (path.filter(|p| !p.is_empty()), excluded) else {
        return false;
    };

    !excluded
        .iter()
        .any(|pattern| is_exempt(path, pattern, Pattern::new(pattern).ok().as_ref()))
}

// The prefix test runs both ways, so "/" or "/api" is exempted by any longer
// pattern beneath it. This is likely broader than intended but is kept as the
// established behavior.
fn is_exempt(path: &str, pattern: &str, glob: Option<&Pattern>) -> bool {
    path == pattern
        || path.starts_with(pattern)
        || pattern.starts_with(path)
        || glob.is_some_and(|glob| glob.matches(path))
}

/// Exempt path list with its glob patterns compiled once
#[derive(Debug, Clone, Default)]
pub struct PathAuthGate {
    patterns: Vec<(String, Option<Pattern>)>,
}

impl PathAuthGate {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(Into::into)
            .map(|pattern: String| {
                let glob = match Pattern::new(&pattern) {
                    Ok(glob) => Some(glob),
                    Err(e) => {
                        warn!("Excluded path '{}' is not a valid glob: {}", pattern, e);
                        None
                    }
                };
                (pattern, glob)
            })
            .collect();
        Self { patterns }
    }

    /// Whether `path` needs authentication
    pub fn requires(&self, path: Option<&str>) -> bool {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return false;
        };

        !self
            .patterns
            .iter()
            .any(|(pattern, glob)| is_exempt(path, pattern, glob.as_ref()))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(pattern, _)| pattern.as_str())
    }
}
