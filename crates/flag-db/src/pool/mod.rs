//! Database connection pool management

mod postgres;

pub use postgres::{bootstrap_schema, create_pool, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
