//! Domain entities - core business objects

mod submission;
mod term;

pub use submission::{normalize_address, SubmissionAttempt, UNKNOWN_ADDRESS};
pub use term::{Term, TermDraft, DEFAULT_NAME, NAME_MAX_CHARS, TEXT_MAX_CHARS, TEXT_MIN_CHARS};
