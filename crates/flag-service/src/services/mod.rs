//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of a request.

pub mod context;
pub mod error;
pub mod feed;
pub mod health;
pub mod rate_limit;
pub mod reaction;
pub mod term;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder, SubmissionPolicy};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use health::HealthService;
pub use rate_limit::SubmissionRateLimiter;
pub use reaction::ReactionService;
pub use term::TermService;
