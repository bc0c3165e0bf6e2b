//! Reaction service
//!
//! Applies flag and like toggles. The server does not know who is reacting;
//! the client reports its previous state and the resulting delta is applied
//! in one atomic store update.

use tracing::{debug, instrument};

use flag_core::{CounterDelta, DomainError, Flag, TermId};

use crate::dto::TermResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Move a term's flag from `prev` to `next`
    #[instrument(skip(self))]
    pub async fn set_flag(
        &self,
        term_id: TermId,
        prev: Option<Flag>,
        next: Option<Flag>,
    ) -> ServiceResult<TermResponse> {
        self.apply(term_id, CounterDelta::for_flag_transition(prev, next))
            .await
    }

    /// Like a term, or take a like back when `unlike` is set
    #[instrument(skip(self))]
    pub async fn set_like(&self, term_id: TermId, unlike: bool) -> ServiceResult<TermResponse> {
        self.apply(term_id, CounterDelta::for_like(unlike)).await
    }

    async fn apply(&self, term_id: TermId, delta: CounterDelta) -> ServiceResult<TermResponse> {
        let term = self
            .ctx
            .term_repo()
            .apply_counter_delta(term_id, delta)
            .await?
            .ok_or(DomainError::TermNotFound(term_id))?;

        debug!(
            term_id = %term_id,
            green_flags = term.green_flags,
            red_flags = term.red_flags,
            likes = term.likes,
            "Reaction applied"
        );

        Ok(TermResponse::from(term))
    }
}
