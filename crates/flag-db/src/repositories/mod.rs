//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in flag-core.

mod error;
mod submission_log;
mod term;

pub use submission_log::PgSubmissionLogRepository;
pub use term::PgTermRepository;
