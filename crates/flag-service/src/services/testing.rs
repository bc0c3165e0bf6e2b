//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use flag_core::ManualClock;
use flag_db::{InMemorySubmissionLog, InMemoryTermRepository};

use super::context::{ServiceContext, ServiceContextBuilder, SubmissionPolicy};

/// A context over fresh in-memory stores with a clock the test controls
pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    pub clock: Arc<ManualClock>,
    pub terms: Arc<InMemoryTermRepository>,
}

pub(crate) fn test_context() -> TestContext {
    test_context_with_policy(SubmissionPolicy::default())
}

pub(crate) fn test_context_with_policy(policy: SubmissionPolicy) -> TestContext {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let terms = Arc::new(InMemoryTermRepository::new());

    let ctx = ServiceContextBuilder::new()
        .term_repo(terms.clone())
        .submission_log(Arc::new(InMemorySubmissionLog::new()))
        .clock(clock.clone())
        .submission_policy(policy)
        .build()
        .unwrap();

    TestContext { ctx, clock, terms }
}
