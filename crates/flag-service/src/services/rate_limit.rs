//! Submission rate limiter
//!
//! Sliding-window limit on submissions per origin address. Every call is
//! recorded, allowed or not, so a client that keeps retrying stays blocked.

use tracing::{debug, instrument, warn};

use flag_core::{DomainError, SubmissionAttempt};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Submission rate limiter
pub struct SubmissionRateLimiter<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionRateLimiter<'a> {
    /// Create a new SubmissionRateLimiter
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record an attempt from `address` and decide whether it may proceed.
    ///
    /// Allowed when the attempts inside the trailing window, this one
    /// included, do not exceed the policy's allowance.
    #[instrument(skip(self))]
    pub async fn can_submit(&self, address: &str) -> ServiceResult<bool> {
        let policy = self.ctx.submission_policy();
        let now = self.ctx.clock().now();

        let attempts = self
            .ctx
            .submission_log()
            .record_and_count(&SubmissionAttempt::new(address, now), now - policy.window())
            .await?;

        let allowed = attempts <= u64::from(policy.max_attempts());
        if allowed {
            debug!(address, attempts, "Submission allowed");
        } else {
            warn!(address, attempts, "Submission rate limit exceeded");
        }

        Ok(allowed)
    }

    /// Like [`Self::can_submit`], but rejects with `RateLimited`
    pub async fn check(&self, address: &str) -> ServiceResult<()> {
        if self.can_submit(address).await? {
            Ok(())
        } else {
            Err(DomainError::RateLimited {
                retry_after_secs: self.ctx.submission_policy().retry_after_secs(),
            }
            .into())
        }
    }

    /// Drop log entries that can no longer affect any decision
    #[instrument(skip(self))]
    pub async fn prune_expired(&self) -> ServiceResult<u64> {
        let cutoff = self.ctx.clock().now() - self.ctx.submission_policy().window();
        let removed = self.ctx.submission_log().prune(cutoff).await?;
        if removed > 0 {
            debug!(removed, "Pruned expired submission log entries");
        }
        Ok(removed)
    }
}
