//! Value objects - immutable domain primitives

mod reaction;
mod sort;
mod term_id;

pub use reaction::{clamp_apply, Counter, CounterDelta, Flag};
pub use sort::TermSort;
pub use term_id::{TermId, TermIdGenerator, TermIdParseError};
