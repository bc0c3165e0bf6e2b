//! Reaction handlers
//!
//! Endpoints for flag and like counters.

use axum::{extract::State, Json};
use flag_service::{
    dto::{FlagRequest, LikeRequest, TermItemResponse},
    ReactionService,
};

use crate::extractors::{JsonBody, OptionalJsonBody, TermIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Move the caller's flag on a term
///
/// POST /api/terms/{id}/flag
pub async fn set_flag(
    State(state): State<AppState>,
    TermIdPath(term_id): TermIdPath,
    JsonBody(request): JsonBody<FlagRequest>,
) -> ApiResult<Json<TermItemResponse>> {
    let service = ReactionService::new(state.service_context());
    let term = service
        .set_flag(term_id, request.prev, request.next)
        .await?;
    Ok(Json(TermItemResponse::new(term)))
}

/// Like a term, or take a like back
///
/// POST /api/terms/{id}/like
///
/// An empty body is a like.
pub async fn set_like(
    State(state): State<AppState>,
    TermIdPath(term_id): TermIdPath,
    OptionalJsonBody(request): OptionalJsonBody<LikeRequest>,
) -> ApiResult<Json<TermItemResponse>> {
    let unlike = request.is_some_and(|r| r.unlike);

    let service = ReactionService::new(state.service_context());
    let term = service.set_like(term_id, unlike).await?;
    Ok(Json(TermItemResponse::new(term)))
}
