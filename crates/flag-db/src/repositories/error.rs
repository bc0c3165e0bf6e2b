//! Error handling utilities for repositories

use flag_core::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database operation failed");
    DomainError::StoreUnavailable(e.to_string())
}

/// Convert a row count to `u64`; counts are never negative
pub fn row_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}
