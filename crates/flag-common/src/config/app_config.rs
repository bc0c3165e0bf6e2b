//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub store: StoreConfig,
    pub database: Option<DatabaseConfig>,
    pub submission: SubmissionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub id_generator: IdGeneratorConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which term store backs the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    /// Process-local store; state is lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue("STORE_BACKEND", other.to_string())),
        }
    }
}

/// Store selection
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Submission rate-limit policy
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Length of the trailing window, in seconds
    #[serde(default = "default_submission_window_secs")]
    pub window_secs: u64,
    /// Attempts allowed per window per address, the current one included
    #[serde(default = "default_submission_max_attempts")]
    pub max_attempts: u32,
    /// How often expired log entries are swept, in seconds
    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
    /// Use the first `X-Forwarded-For` entry as the origin address
    #[serde(default = "default_true")]
    pub trust_forwarded_for: bool,
}

impl SubmissionConfig {
    #[must_use]
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    #[must_use]
    pub fn prune_interval(&self) -> Duration {
        Duration::from_secs(self.prune_interval_secs)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            window_secs: default_submission_window_secs(),
            max_attempts: default_submission_max_attempts(),
            prune_interval_secs: default_prune_interval_secs(),
            trust_forwarded_for: true,
        }
    }
}

/// General per-IP request throttling (all endpoints)
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Term ID generator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IdGeneratorConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "flagboard".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_submission_window_secs() -> u64 {
    10
}

fn default_submission_max_attempts() -> u32 {
    1
}

fn default_prune_interval_secs() -> u64 {
    60
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_true() -> bool {
    true
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => Environment::default(),
        };

        let backend = match env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StoreBackend::default(),
        };

        let database = match (backend, env::var("DATABASE_URL")) {
            (_, Ok(url)) => Some(DatabaseConfig {
                url,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections())?,
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS", default_min_connections())?,
            }),
            (StoreBackend::Postgres, Err(_)) => return Err(ConfigError::MissingVar("DATABASE_URL")),
            (StoreBackend::Memory, Err(_)) => None,
        };

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            store: StoreConfig { backend },
            database,
            submission: SubmissionConfig {
                window_secs: parse_var("SUBMISSION_WINDOW_SECS", default_submission_window_secs())?,
                max_attempts: parse_var(
                    "SUBMISSION_MAX_ATTEMPTS",
                    default_submission_max_attempts(),
                )?,
                prune_interval_secs: parse_var(
                    "SUBMISSION_PRUNE_INTERVAL_SECS",
                    default_prune_interval_secs(),
                )?,
                trust_forwarded_for: parse_var("TRUST_FORWARDED_FOR", true)?,
            },
            rate_limit: RateLimitConfig {
                enabled: parse_var("RATE_LIMIT_ENABLED", false)?,
                requests_per_second: parse_var(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: parse_var("RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            id_generator: IdGeneratorConfig {
                worker_id: parse_var("WORKER_ID", 0)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Configuration for an in-memory instance, used by tests and local runs
    #[must_use]
    pub fn in_memory(port: u16) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            api: ServerConfig {
                host: default_host(),
                port,
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
            },
            database: None,
            submission: SubmissionConfig::default(),
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::default(),
            id_generator: IdGeneratorConfig::default(),
        }
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submission.window_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SUBMISSION_WINDOW_SECS",
                "must be at least 1".to_string(),
            ));
        }
        if self.submission.max_attempts == 0 {
            return Err(ConfigError::InvalidValue(
                "SUBMISSION_MAX_ATTEMPTS",
                "must be at least 1".to_string(),
            ));
        }
        if self.id_generator.worker_id >= 1024 {
            return Err(ConfigError::InvalidValue(
                "WORKER_ID",
                self.id_generator.worker_id.to_string(),
            ));
        }
        if self.store.backend == StoreBackend::Postgres && self.database.is_none() {
            return Err(ConfigError::MissingVar("DATABASE_URL"));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
