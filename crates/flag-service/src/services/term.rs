//! Term service
//!
//! Handles term submission and lookup.

use tracing::{info, instrument};

use flag_core::{DomainError, Term, TermDraft, TermId};

use crate::dto::{CreateTermRequest, TermResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Term service
pub struct TermService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TermService<'a> {
    /// Create a new TermService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and store a new term
    ///
    /// The caller charges the submission against the rate limiter first.
    #[instrument(skip(self, request))]
    pub async fn create_term(&self, request: CreateTermRequest) -> ServiceResult<TermResponse> {
        let draft = TermDraft::new(&request.text, request.name.as_deref())?;
        let term = Term::from_draft(self.ctx.generate_id(), draft);

        let stored = self.ctx.term_repo().insert(&term).await?;

        info!(term_id = %stored.id, "Term submitted");

        Ok(TermResponse::from(stored))
    }

    /// Get a term by ID
    #[instrument(skip(self))]
    pub async fn get_term(&self, id: TermId) -> ServiceResult<TermResponse> {
        let term = self
            .ctx
            .term_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TermNotFound(id))?;

        Ok(TermResponse::from(term))
    }
}
