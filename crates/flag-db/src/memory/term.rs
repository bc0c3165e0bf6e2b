//! In-memory implementation of TermRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::instrument;

use flag_core::{CounterDelta, DomainError, RepoResult, Term, TermId, TermRepository, TermSort, MAX_LIST_LIMIT};

/// Terms keyed by ID behind a single lock
#[derive(Default)]
pub struct InMemoryTermRepository {
    terms: RwLock<BTreeMap<TermId, Term>>,
}

impl InMemoryTermRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored terms
    pub fn len(&self) -> usize {
        self.terms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.read().is_empty()
    }
}

#[async_trait]
impl TermRepository for InMemoryTermRepository {
    #[instrument(skip(self, term), fields(term_id = %term.id))]
    async fn insert(&self, term: &Term) -> RepoResult<Term> {
        let mut terms = self.terms.write();
        if terms.contains_key(&term.id) {
            return Err(DomainError::InternalError(format!(
                "duplicate term id {}",
                term.id
            )));
        }
        terms.insert(term.id, term.clone());
        Ok(term.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TermId) -> RepoResult<Option<Term>> {
        Ok(self.terms.read().get(&id).cloned())
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

        let mut terms = self.terms.write();
        Ok(terms.get_mut(&id).map(|term| {
            term.apply_delta(&delta);
            term.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn list(&self, sort: TermSort, limit: i64) -> RepoResult<Vec<Term>> {
        let limit = usize::try_from(limit.clamp(1, MAX_LIST_LIMIT)).unwrap_or_default();

        let mut terms: Vec<Term> = self.terms.read().values().cloned().collect();
        match sort.counter() {
            Some(counter) => terms.sort_by_key(|t| {
                (Reverse(t.counter(counter)), Reverse(t.created_at), Reverse(t.id))
            }),
            None => terms.sort_by_key(|t| (Reverse(t.created_at), Reverse(t.id))),
        }
        terms.truncate(limit);

        Ok(terms)
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
