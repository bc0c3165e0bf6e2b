//! Service context - dependency container for services
//!
//! Holds the stores, the ID generator, the clock, and the submission policy.

use chrono::Duration;
use std::sync::Arc;

use flag_common::SubmissionConfig;
use flag_core::{
    Clock, SubmissionLogRepository, SystemClock, TermId, TermIdGenerator, TermRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Longest window accepted; longer configurations are clamped
const MAX_WINDOW_SECS: u64 = 86_400;

/// How many submissions one address may make inside the trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    window: Duration,
    max_attempts: u32,
}

impl SubmissionPolicy {
    /// `max_attempts` counts the current attempt; zero is treated as one
    pub fn new(window_secs: u64, max_attempts: u32) -> Self {
        let secs = window_secs.clamp(1, MAX_WINDOW_SECS) as i64;
        Self {
            window: Duration::seconds(secs),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Value for a `Retry-After` hint
    pub fn retry_after_secs(&self) -> u64 {
        self.window.num_seconds().unsigned_abs()
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self::new(10, 1)
    }
}

impl From<&SubmissionConfig> for SubmissionPolicy {
    fn from(config: &SubmissionConfig) -> Self {
        Self::new(config.window_secs, config.max_attempts)
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Stores
    term_repo: Arc<dyn TermRepository>,
    submission_log: Arc<dyn SubmissionLogRepository>,

    // Services
    id_generator: Arc<TermIdGenerator>,
    clock: Arc<dyn Clock>,
    submission_policy: SubmissionPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        term_repo: Arc<dyn TermRepository>,
        submission_log: Arc<dyn SubmissionLogRepository>,
        id_generator: Arc<TermIdGenerator>,
        clock: Arc<dyn Clock>,
        submission_policy: SubmissionPolicy,
    ) -> Self {
        Self {
            term_repo,
            submission_log,
            id_generator,
            clock,
            submission_policy,
        }
    }

    // === Stores ===

    /// Get the term repository
    pub fn term_repo(&self) -> &dyn TermRepository {
        self.term_repo.as_ref()
    }

    /// Get the submission log
    pub fn submission_log(&self) -> &dyn SubmissionLogRepository {
        self.submission_log.as_ref()
    }

    // === Services ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn submission_policy(&self) -> SubmissionPolicy {
        self.submission_policy
    }

    /// Generate a new term ID
    pub fn generate_id(&self) -> TermId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("worker_id", &self.id_generator.worker_id())
            .field("submission_policy", &self.submission_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    term_repo: Option<Arc<dyn TermRepository>>,
    submission_log: Option<Arc<dyn SubmissionLogRepository>>,
    id_generator: Option<Arc<TermIdGenerator>>,
    clock: Option<Arc<dyn Clock>>,
    submission_policy: Option<SubmissionPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term_repo(mut self, repo: Arc<dyn TermRepository>) -> Self {
        self.term_repo = Some(repo);
        self
    }

    pub fn submission_log(mut self, repo: Arc<dyn SubmissionLogRepository>) -> Self {
        self.submission_log = Some(repo);
        self
    }

    pub fn id_generator(mut self, generator: Arc<TermIdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn submission_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.submission_policy = Some(policy);
        self
    }

    /// Build the ServiceContext. The clock defaults to the system clock, the
    /// generator to worker 0, and the policy to one submission per 10 seconds.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.term_repo
                .ok_or_else(|| ServiceError::internal("term_repo is required"))?,
            self.submission_log
                .ok_or_else(|| ServiceError::internal("submission_log is required"))?,
            self.id_generator
                .unwrap_or_else(|| Arc::new(TermIdGenerator::default())),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.submission_policy.unwrap_or_default(),
        ))
    }
}
