//! In-memory implementation of SubmissionLogRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::collections::VecDeque;
use tracing::instrument;

use flag_core::{RepoResult, SubmissionAttempt, SubmissionLogRepository};

/// Attempt timestamps per address, oldest first
#[derive(Default)]
pub struct InMemorySubmissionLog {
    entries: DashMap<String, VecDeque<DateTime<Utc>>>,
}

impl InMemorySubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total retained entries across all addresses
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionLogRepository for InMemorySubmissionLog {
    #[instrument(skip(self, attempt))]
    async fn record_and_count(
        &self,
        attempt: &SubmissionAttempt,
        since: DateTime<Utc>,
    ) -> RepoResult<u64> {
        // The entry guard holds the shard lock until the count is taken
        let mut timestamps = self.entries.entry(attempt.address.clone()).or_default();

        while timestamps.front().is_some_and(|t| *t <= since) {
            timestamps.pop_front();
        }
        timestamps.push_back(attempt.submitted_at);

        Ok(timestamps.iter().filter(|t| **t > since).count() as u64)
    }

    #[instrument(skip(self))]
    async fn prune(&self, older_than: DateTime<Utc>) -> RepoResult<u64> {
        let mut removed = 0_u64;
        self.entries.retain(|_, timestamps| {
            let before = timestamps.len();
            timestamps.retain(|t| *t > older_than);
            removed += (before - timestamps.len()) as u64;
            !timestamps.is_empty()
        });
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(10)
    }

    #[tokio::test]
    async fn test_counts_include_current_attempt() {
        let log = InMemorySubmissionLog::new();
        let now = Utc::now();

        let first = log
            .record_and_count(&SubmissionAttempt::new("203.0.113.1", now), window_start(now))
            .await
            .unwrap();
        assert_eq!(first, 1);

        let second = log
            .record_and_count(&SubmissionAttempt::new("203.0.113.1", now), window_start(now))
            .await
            .unwrap();
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_addresses_are_independent() {
        let log = InMemorySubmissionLog::new();
        let now = Utc::now();

        log.record_and_count(&SubmissionAttempt::new("203.0.113.1", now), window_start(now))
            .await
            .unwrap();
        let other = log
            .record_and_count(&SubmissionAttempt::new("203.0.113.2", now), window_start(now))
            .await
            .unwrap();
        assert_eq!(other, 1);
    }

    #[tokio::test]
    async fn test_entries_on_window_edge_are_excluded() {
        let log = InMemorySubmissionLog::new();
        let start = Utc::now();
        log.record_and_count(&SubmissionAttempt::new("a", start), window_start(start))
            .await
            .unwrap();

        // Exactly 10s later the first entry is no longer inside the window
        let edge = start + Duration::seconds(10);
        let count = log
            .record_and_count(&SubmissionAttempt::new("a", edge), window_start(edge))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_prune_removes_expired_entries() {
        let log = InMemorySubmissionLog::new();
        let start = Utc::now();
        for (i, address) in ["a", "a", "b"].iter().enumerate() {
            let at = start + Duration::seconds(i as i64);
            log.record_and_count(&SubmissionAttempt::new(*address, at), window_start(at))
                .await
                .unwrap();
        }

        let removed = log.prune(start + Duration::seconds(1)).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(log.len(), 1);
        assert_eq!(log.prune(start + Duration::seconds(5)).await.unwrap(), 1);
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_attempts_are_counted_once_each() {
        let log = Arc::new(InMemorySubmissionLog::new());
        let now = Utc::now();

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..20 {
            let log = Arc::clone(&log);
            tasks.spawn(async move {
                log.record_and_count(&SubmissionAttempt::new("198.51.100.9", now), window_start(now))
                    .await
                    .unwrap()
            });
        }

        let mut counts = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            counts.push(joined.unwrap());
        }
        counts.sort_unstable();
        assert_eq!(counts, (1..=20).collect::<Vec<u64>>());
    }
}
