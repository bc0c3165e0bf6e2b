//! Response DTOs for API endpoints
//!
//! Term IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Term Responses
// ============================================================================

/// A term with its reaction counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermResponse {
    pub id: String,
    pub text: String,
    pub name: String,
    pub green_flags: i32,
    pub red_flags: i32,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

/// `{"items": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct TermListResponse {
    pub items: Vec<TermResponse>,
}

impl TermListResponse {
    pub fn new(items: Vec<TermResponse>) -> Self {
        Self { items }
    }
}

/// `{"item": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct TermItemResponse {
    pub item: TermResponse,
}

impl TermItemResponse {
    pub fn new(item: TermResponse) -> Self {
        Self { item }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
