//! Repository traits (ports) - define the interface for data access
//!
//! The store is passed explicitly as a trait object, so PostgreSQL and
//! in-memory implementations are interchangeable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{SubmissionAttempt, Term};
use crate::error::DomainError;
use crate::value_objects::{CounterDelta, TermId, TermSort};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Maximum number of terms returned by a single listing
pub const MAX_LIST_LIMIT: i64 = 200;

// ============================================================================
// Term Repository
// ============================================================================

#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Persist a new term and return the stored row
    async fn insert(&self, term: &Term) -> RepoResult<Term>;

    /// Find term by ID
    async fn find_by_id(&self, id: TermId) -> RepoResult<Option<Term>>;

    /// Add `delta` to the term's counters, clamping each at zero.
    ///
    /// Must be atomic per term: concurrent deltas on the same ID are all
    /// reflected and no reader sees a partially applied delta. Returns `None`
    /// when the term does not exist, in which case nothing is modified.
    async fn apply_counter_delta(&self, id: TermId, delta: CounterDelta)
        -> RepoResult<Option<Term>>;

    /// Snapshot of at most `limit` terms (capped at [`MAX_LIST_LIMIT`]) in
    /// the requested order
    async fn list(&self, sort: TermSort, limit: i64) -> RepoResult<Vec<Term>>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Submission Log Repository
// ============================================================================

#[async_trait]
pub trait SubmissionLogRepository: Send + Sync {
    /// Append `attempt` and return how many attempts from the same address
    /// have `submitted_at > since`, the new one included.
    ///
    /// Append and count must be atomic per address, so two concurrent
    /// attempts can never both observe a count that excludes the other.
    async fn record_and_count(
        &self,
        attempt: &SubmissionAttempt,
        since: DateTime<Utc>,
    ) -> RepoResult<u64>;

    /// Delete entries with `submitted_at <= older_than`; returns rows removed
    async fn prune(&self, older_than: DateTime<Utc>) -> RepoResult<u64>;
}
