//! Feed service
//!
//! Term listings in a client-selected order.

use tracing::instrument;

use flag_core::{TermSort, MAX_LIST_LIMIT};

use crate::dto::TermResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List terms for a raw sort key; unknown or missing keys mean `recent`
    pub async fn list(&self, sort_key: Option<&str>) -> ServiceResult<Vec<TermResponse>> {
        self.list_sorted(TermSort::from_key(sort_key)).await
    }

    /// List up to 200 terms in the given order
    #[instrument(skip(self))]
    pub async fn list_sorted(&self, sort: TermSort) -> ServiceResult<Vec<TermResponse>> {
        let terms = self.ctx.term_repo().list(sort, MAX_LIST_LIMIT).await?;
        Ok(terms.into_iter().map(TermResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CreateTermRequest;
    use crate::services::testing::test_context;
    use crate::services::{ReactionService, TermService};
    use flag_core::{Flag, TermId};

    fn ids(terms: &[TermResponse]) -> Vec<String> {
        terms.iter().map(|t| t.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_listing_order() {
        let t = test_context();
        let terms = TermService::new(&t.ctx);
        let a = terms
            .create_term(CreateTermRequest {
                text: "term A here".to_string(),
                name: None,
            })
            .await
            .unwrap();
        let b = terms
            .create_term(CreateTermRequest {
                text: "term B here".to_string(),
                name: None,
            })
            .await
            .unwrap();

        let feed = FeedService::new(&t.ctx);
        let recent = feed.list(Some("recent")).await.unwrap();
        assert_eq!(ids(&recent), vec![b.id.clone(), a.id.clone()]);

        let a_id: TermId = a.id.parse().unwrap();
        let reactions = ReactionService::new(&t.ctx);
        reactions.set_flag(a_id, None, Some(Flag::Green)).await.unwrap();
        reactions.set_flag(a_id, None, Some(Flag::Green)).await.unwrap();

        let green = feed.list(Some("green")).await.unwrap();
        assert_eq!(ids(&green), vec![a.id.clone(), b.id.clone()]);
        assert_eq!(green[0].green_flags, 2);

        // Recent order is unaffected by reactions
        let recent = feed.list(None).await.unwrap();
        assert_eq!(ids(&recent), vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_unknown_sort_falls_back_to_recent() {
        let t = test_context();
        let terms = TermService::new(&t.ctx);
        for text in ["first term", "second term"] {
            terms
                .create_term(CreateTermRequest {
                    text: text.to_string(),
                    name: None,
                })
                .await
                .unwrap();
        }

        let feed = FeedService::new(&t.ctx);
        let fallback = feed.list(Some("hottest")).await.unwrap();
        let recent = feed.list_sorted(TermSort::Recent).await.unwrap();
        assert_eq!(ids(&fallback), ids(&recent));
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let t = test_context();
        assert!(FeedService::new(&t.ctx).list(Some("liked")).await.unwrap().is_empty());
    }
}
