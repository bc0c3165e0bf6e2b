//! Configuration management

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdGeneratorConfig, RateLimitConfig, ServerConfig, StoreBackend, StoreConfig,
    SubmissionConfig,
};
