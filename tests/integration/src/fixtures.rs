//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Counter for unique origin addresses
static COUNTER: AtomicU32 = AtomicU32::new(1);

/// A fresh private-range address, so tests never share a rate-limit bucket
pub fn unique_origin() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff)
}

/// Submit term request
#[derive(Debug, Serialize)]
pub struct SubmitTermRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SubmitTermRequest {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            name: None,
        }
    }

    pub fn named(text: &str, name: &str) -> Self {
        Self {
            text: text.to_string(),
            name: Some(name.to_string()),
        }
    }
}

/// Flag transition request
#[derive(Debug, Serialize)]
pub struct FlagTransition {
    pub prev: Option<&'static str>,
    pub next: Option<&'static str>,
}

/// Like request
#[derive(Debug, Serialize)]
pub struct LikeToggle {
    pub unlike: bool,
}

/// Term as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct TermBody {
    pub id: String,
    pub text: String,
    pub name: String,
    pub green_flags: i64,
    pub red_flags: i64,
    pub likes: i64,
    pub created_at: String,
}

/// `{"item": Term}`
#[derive(Debug, Deserialize)]
pub struct ItemBody {
    pub item: TermBody,
}

/// `{"items": [Term]}`
#[derive(Debug, Deserialize)]
pub struct ItemsBody {
    pub items: Vec<TermBody>,
}

/// `{"error": {"code", "message"}}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
