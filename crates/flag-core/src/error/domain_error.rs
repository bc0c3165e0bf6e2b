//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::TermId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed term text or name; the message tells the caller how to fix it
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Too many submissions from one origin inside the window
    #[error("Too many submissions, try again in a few seconds")]
    RateLimited { retry_after_secs: u64 },

    #[error("Term not found: {0}")]
    TermNotFound(TermId),

    /// Transient storage failure; safe to retry with backoff
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::TermNotFound(_) => "UNKNOWN_TERM",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TermNotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
