//! Health service
//!
//! Readiness reporting for the store behind the ledger.

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check the term store; failures are reported, not propagated
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let store_healthy = match self.ctx.term_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store readiness check failed");
                false
            }
        };

        ReadinessResponse::ready(store_healthy)
    }
}
