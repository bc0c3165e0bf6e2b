//! PostgreSQL implementation of SubmissionLogRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use flag_core::{RepoResult, SubmissionAttempt, SubmissionLogRepository};

use super::error::{map_db_error, row_count};

/// PostgreSQL implementation of SubmissionLogRepository
#[derive(Clone)]
pub struct PgSubmissionLogRepository {
    pool: PgPool,
}

impl PgSubmissionLogRepository {
    /// Create a new PgSubmissionLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionLogRepository for PgSubmissionLogRepository {
    #[instrument(skip(self, attempt))]
    async fn record_and_count(
        &self,
        attempt: &SubmissionAttempt,
        since: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serializes concurrent attempts from one address until commit
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&attempt.address)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO submission_log (address, submitted_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(&attempt.address)
        .bind(attempt.submitted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM submission_log
            WHERE address = $1 AND submitted_at > $2
            "#,
        )
        .bind(&attempt.address)
        .bind(since)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(row_count(count))
    }

    #[instrument(skip(self))]
    async fn prune(&self, older_than: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM submission_log WHERE submitted_at <= $1
            "#,
        )
        .bind(older_than)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
