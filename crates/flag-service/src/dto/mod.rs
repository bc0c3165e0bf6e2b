//! Data transfer objects for API requests and responses
//!
//! - Request DTOs deserialized from API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateTermRequest, FlagRequest, LikeRequest, ListTermsQuery};
pub use responses::{
    HealthChecks, HealthResponse, ReadinessResponse, TermItemResponse, TermListResponse,
    TermResponse,
};
