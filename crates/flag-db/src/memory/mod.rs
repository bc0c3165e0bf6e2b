//! In-memory repository implementations
//!
//! Process-local stores with the same atomicity guarantees as the PostgreSQL
//! repositories. State is lost on restart.

mod submission_log;
mod term;

pub use submission_log::InMemorySubmissionLog;
pub use term::InMemoryTermRepository;
