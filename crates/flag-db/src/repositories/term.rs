//! PostgreSQL implementation of TermRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use flag_core::{CounterDelta, RepoResult, Term, TermId, TermRepository, TermSort, MAX_LIST_LIMIT};

use crate::mappers::TermInsert;
use crate::models::TermModel;

use super::error::map_db_error;

/// Listing query for each sort order. Sort keys never reach the SQL text.
fn list_query(sort: TermSort) -> &'static str {
    match sort {
        TermSort::Recent => {
            r#"
            SELECT id, text, name, green_flags, red_flags, likes, created_at
            FROM terms
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#
        }
        TermSort::Green => {
            r#"
            SELECT id, text, name, green_flags, red_flags, likes, created_at
            FROM terms
            ORDER BY green_flags DESC, created_at DESC, id DESC
            LIMIT $1
            "#
        }
        TermSort::Red => {
            r#"
            SELECT id, text, name, green_flags, red_flags, likes, created_at
            FROM terms
            ORDER BY red_flags DESC, created_at DESC, id DESC
            LIMIT $1
            "#
        }
        TermSort::Liked => {
            r#"
            SELECT id, text, name, green_flags, red_flags, likes, created_at
            FROM terms
            ORDER BY likes DESC, created_at DESC, id DESC
            LIMIT $1
            "#
        }
    }
}

/// PostgreSQL implementation of TermRepository
#[derive(Clone)]
pub struct PgTermRepository {
    pool: PgPool,
}

impl PgTermRepository {
    /// Create a new PgTermRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TermRepository for PgTermRepository {
    #[instrument(skip(self, term), fields(term_id = %term.id))]
    async fn insert(&self, term: &Term) -> RepoResult<Term> {
        let insert = TermInsert::new(term);

        let result = sqlx::query_as::<_, TermModel>(
            r#"
            INSERT INTO terms (id, text, name, green_flags, red_flags, likes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, text, name, green_flags, red_flags, likes, created_at
            "#,
        )
        .bind(insert.id)
        .bind(insert.text)
        .bind(insert.name)
        .bind(insert.green_flags)
        .bind(insert.red_flags)
        .bind(insert.likes)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Term::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TermId) -> RepoResult<Option<Term>> {
        let result = sqlx::query_as::<_, TermModel>(
            r#"
            SELECT id, text, name, green_flags, red_flags, likes, created_at
            FROM terms
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Term::from))
    }

    #[instrument(skip(self))]
    async fn apply_counter_delta(
        &self,
        id: TermId,
        delta: CounterDelta,
    ) -> RepoResult<Option<Term>> {
        if delta.is_zero() {
            return self.find_by_id(id).await;
        }

        // Single-row UPDATE: the row lock serializes concurrent deltas and the
        // whole vector lands at once.
        let result = sqlx::query_as::<_, TermModel>(
            r#"
            UPDATE terms
            SET green_flags = GREATEST(green_flags + $2, 0),
                red_flags = GREATEST(red_flags + $3, 0),
                likes = GREATEST(likes + $4, 0)
            WHERE id = $1
            RETURNING id, text, name, green_flags, red_flags, likes, created_at
            "#,
        )
        .bind(id.into_inner())
        .bind(delta.green_flags)
        .bind(delta.red_flags)
        .bind(delta.likes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Term::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, sort: TermSort, limit: i64) -> RepoResult<Vec<Term>> {
        let limit = limit.clamp(1, MAX_LIST_LIMIT);

        let results = sqlx::query_as::<_, TermModel>(list_query(sort))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Term::from).collect())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
