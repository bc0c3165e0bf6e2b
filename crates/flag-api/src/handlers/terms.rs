//! Term handlers
//!
//! Endpoints for submitting, listing, and fetching terms.

use axum::{
    extract::{Query, State},
    Json,
};
use flag_service::{
    dto::{CreateTermRequest, ListTermsQuery, TermItemResponse, TermListResponse},
    FeedService, SubmissionRateLimiter, TermService,
};

use crate::extractors::{ClientAddr, JsonBody, TermIdPath};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List terms
///
/// GET /api/terms?sort=recent|green|red|liked
pub async fn list_terms(
    State(state): State<AppState>,
    query: Option<Query<ListTermsQuery>>,
) -> ApiResult<Json<TermListResponse>> {
    let sort = query.and_then(|Query(q)| q.sort);

    let service = FeedService::new(state.service_context());
    let items = service.list(sort.as_deref()).await?;
    Ok(Json(TermListResponse::new(items)))
}

/// Submit a term
///
/// POST /api/terms
///
/// The attempt is charged against the origin address before the body is
/// looked at, so malformed submissions count toward the limit too.
pub async fn create_term(
    State(state): State<AppState>,
    ClientAddr(address): ClientAddr,
    body: Result<JsonBody<CreateTermRequest>, ApiError>,
) -> ApiResult<Created<Json<TermItemResponse>>> {
    let ctx = state.service_context();
    SubmissionRateLimiter::new(ctx).check(&address).await?;

    let JsonBody(request) = body?;
    let term = TermService::new(ctx).create_term(request).await?;
    Ok(Created(Json(TermItemResponse::new(term))))
}

/// Get a term by ID
///
/// GET /api/terms/{id}
pub async fn get_term(
    State(state): State<AppState>,
    TermIdPath(term_id): TermIdPath,
) -> ApiResult<Json<TermItemResponse>> {
    let service = TermService::new(state.service_context());
    let term = service.get_term(term_id).await?;
    Ok(Json(TermItemResponse::new(term)))
}
