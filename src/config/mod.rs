//! Configuration management for the service
//!
//! Configuration comes from a YAML file or from environment variables.

pub mod models;

pub use models::*;

use crate::utils::auth::crypto::HashCost;
use crate::utils::error::{AuthError, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AuthError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup, starting from defaults.
    ///
    /// Unset keys keep their default. An unparsable `SESSION_DURATION` is
    /// read as `0` (no expiry); any other unparsable number is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("AUTH_TYPE") {
            config.auth.auth_type = AuthType::from_str(&value).map_err(AuthError::Config)?;
        }
        if let Some(value) = lookup("SESSION_NAME") {
            config.auth.session_name = value;
        }
        if let Some(value) = lookup("SESSION_DURATION") {
            config.auth.session_duration = value.trim().parse().unwrap_or_else(|_| {
                warn!("SESSION_DURATION '{}' is not an integer, sessions will not expire", value);
                0
            });
        }
        if let Some(value) = lookup("AUTH_EXCLUDED_PATHS") {
            config.auth.excluded_paths = split_list(&value);
        }

        let mut cost = HashCost::default();
        if let Some(value) = lookup("HASH_MEMORY_KIB") {
            cost.memory_kib = parse_number("HASH_MEMORY_KIB", &value)?;
        }
        if let Some(value) = lookup("HASH_ITERATIONS") {
            cost.iterations = parse_number("HASH_ITERATIONS", &value)?;
        }
        if let Some(value) = lookup("HASH_PARALLELISM") {
            cost.parallelism = parse_number("HASH_PARALLELISM", &value)?;
        }
        config.auth.hash_cost = cost;

        if let Some(value) = lookup("API_HOST") {
            config.server.host = value;
        }
        if let Some(value) = lookup("API_PORT") {
            config.server.port = parse_number("API_PORT", &value)?;
        }

        config.storage.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(value) = lookup("PII_FIELDS") {
            config.logging.pii_fields = split_list(&value);
        }
        if let Some(value) = lookup("LOG_REDACTION") {
            config.logging.redaction = value;
        }
        if let Some(value) = lookup("LOG_SEPARATOR") {
            config.logging.separator = value;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Some(value) = lookup("LOG_FORMAT") {
            config.logging.format = LogFormat::from_str(&value).map_err(AuthError::Config)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| AuthError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| AuthError::Config(format!("Auth config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| AuthError::Config(format!("Storage config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthError::Config(format!("Logging config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.auth = self.auth.merge(other.auth);
        self.storage = self.storage.merge(other.storage);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuthError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AuthError::Config(format!("{} must be a number, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8080

auth:
  auth_type: session_exp_auth
  session_name: "_my_session_id"
  session_duration: 60
  excluded_paths:
    - "/api/v1/status/"
    - "/api/v1/stat*"
  hash_cost:
    memory_kib: 64
    iterations: 1
    parallelism: 1

storage:
  database_url: "sqlite::memory:"

logging:
  format: json
  pii_fields: ["email", "ssn"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.auth.auth_type, AuthType::SessionExpAuth);
        assert_eq!(config.auth.session_name, "_my_session_id");
        assert_eq!(config.auth.session_ttl(), 60);
        assert_eq!(config.auth.excluded_paths.len(), 2);
        assert_eq!(config.auth.hash_cost.memory_kib, 64);
        assert!(config.storage.uses_database());
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.pii_fields, vec!["email", "ssn"]);
        assert_eq!(config.logging.separator, ";");
    }

    #[tokio::test]
    async fn test_config_from_missing_file() {
        let result = Config::from_file("/nonexistent/userauth.yaml").await;
        assert!(matches!(result, Err(AuthError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.session_name, "session_id");
        assert_eq!(config.auth.session_ttl(), 0);
        assert!(!config.storage.uses_database());
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_TYPE", "basic_auth"),
            ("SESSION_NAME", "sid"),
            ("SESSION_DURATION", "120"),
            ("AUTH_EXCLUDED_PATHS", "/api/v1/status/, /public/*,"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9000"),
            ("DATABASE_URL", "sqlite://users.db?mode=rwc"),
            ("PII_FIELDS", "email,phone"),
            ("LOG_REDACTION", "[x]"),
            ("LOG_SEPARATOR", "|"),
            ("LOG_FORMAT", "json"),
            ("HASH_ITERATIONS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.auth.auth_type, AuthType::BasicAuth);
        assert_eq!(config.auth.session_name, "sid");
        assert_eq!(config.auth.session_duration, 120);
        // Only session_exp_auth expires sessions
        assert_eq!(config.auth.session_ttl(), 0);
        assert_eq!(config.auth.excluded_paths, vec!["/api/v1/status/", "/public/*"]);
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("sqlite://users.db?mode=rwc")
        );
        assert_eq!(config.logging.pii_fields, vec!["email", "phone"]);
        assert_eq!(config.logging.separator, "|");
        assert_eq!(config.auth.hash_cost.iterations, 3);
    }

    #[test]
    fn test_unparsable_session_duration_is_zero() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_TYPE", "session_exp_auth"),
            ("SESSION_DURATION", "soon"),
        ]))
        .unwrap();
        assert_eq!(config.auth.session_duration, 0);
        assert_eq!(config.auth.session_ttl(), 0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("AUTH_TYPE", "kerberos")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("API_PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SESSION_NAME", "")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("LOG_SEPARATOR", ";;")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("LOG_REDACTION", "a;b")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("HASH_ITERATIONS", "0")])).is_err());
    }

    #[test]
    fn test_blank_database_url_means_memory() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(!config.storage.uses_database());
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let base = Config::default();
        let mut other = Config::default();
        other.server.port = 8081;
        other.auth.auth_type = AuthType::SessionExpAuth;
        other.auth.session_duration = 30;

        let merged = base.merge(other);
        assert_eq!(merged.server.port, 8081);
        assert_eq!(merged.auth.session_ttl(), 30);
        assert_eq!(merged.server.host, "0.0.0.0");
    }

    #[test]
    fn test_config_serialization() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("session_auth"));
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
