//! Path parameter extractors
//!
//! Type-safe extraction of term IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use flag_core::TermId;

use crate::response::ApiError;

/// Term ID from the `:id` path segment.
///
/// A segment that is not a valid ID cannot name an existing term, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct TermIdPath(pub TermId);

#[async_trait]
impl<S> FromRequestParts<S> for TermIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::UnknownTerm)?;

        raw.parse().map(TermIdPath).map_err(|_| ApiError::UnknownTerm)
    }
}
