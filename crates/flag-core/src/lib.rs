//! # flag-core
//!
//! Domain layer for the reaction and submission ledger: terms, counter deltas,
//! reaction transitions, sort keys, and the repository traits the storage
//! layer implements. No database or web framework dependencies live here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_address, SubmissionAttempt, Term, TermDraft, DEFAULT_NAME, UNKNOWN_ADDRESS,
};
pub use error::DomainError;
pub use traits::{
    Clock, ManualClock, RepoResult, SubmissionLogRepository, SystemClock, TermRepository,
    MAX_LIST_LIMIT,
};
pub use value_objects::{
    Counter, CounterDelta, Flag, TermId, TermIdGenerator, TermIdParseError, TermSort,
};
