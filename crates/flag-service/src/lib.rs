//! # flag-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    FeedService, HealthService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SubmissionPolicy, SubmissionRateLimiter, TermService,
};
