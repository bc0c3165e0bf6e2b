//! # flag-db
//!
//! Storage layer implementing the repository traits from `flag-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repository implementations
//! - In-memory repository implementations for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use flag_db::{bootstrap_schema, create_pool, DatabaseConfig, PgTermRepository};
//!
//! async fn example(settings: &flag_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(settings)).await?;
//!     bootstrap_schema(&pool).await?;
//!     let terms = PgTermRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemorySubmissionLog, InMemoryTermRepository};
pub use pool::{bootstrap_schema, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgSubmissionLogRepository, PgTermRepository};
