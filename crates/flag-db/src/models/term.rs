//! Term database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for terms table
#[derive(Debug, Clone, FromRow)]
pub struct TermModel {
    pub id: i64,
    pub text: String,
    pub name: String,
    pub green_flags: i32,
    pub red_flags: i32,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}
