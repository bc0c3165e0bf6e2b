//! Submission attempt - one row of the rate-limit ledger

use chrono::{DateTime, Utc};
use std::net::IpAddr;

/// Shared bucket for requests whose origin cannot be determined.
///
/// All such clients share one rate-limit window.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// A recorded submission attempt, allowed or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAttempt {
    pub address: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionAttempt {
    pub fn new(address: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            address: address.into(),
            submitted_at,
        }
    }
}

/// Normalize a raw origin string into a rate-limit key.
///
/// Parseable IP addresses are returned in canonical form; anything else maps
/// to [`UNKNOWN_ADDRESS`].
pub fn normalize_address(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .and_then(|s| s.parse::<IpAddr>().ok())
        .map_or_else(|| UNKNOWN_ADDRESS.to_string(), |ip| ip.to_string())
}
