//! Ports - interfaces the domain needs from the outside world

mod clock;
mod repositories;

pub use clock::{Clock, ManualClock, SystemClock};
pub use repositories::{RepoResult, SubmissionLogRepository, TermRepository, MAX_LIST_LIMIT};
