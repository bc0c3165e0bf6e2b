//! Request DTOs for API endpoints
//!
//! Field-level rules live on [`flag_core::TermDraft`]; these types only
//! describe the wire shape.

use flag_core::Flag;
use serde::Deserialize;

/// New term submission.
///
/// A missing `text` deserializes as empty so it is reported by the same
/// length rule as a short one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTermRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub name: Option<String>,
}

/// Flag toggle: the client's previous and desired state. `null` or a
/// missing field means "no flag".
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FlagRequest {
    #[serde(default)]
    pub prev: Option<Flag>,

    #[serde(default)]
    pub next: Option<Flag>,
}

/// Like toggle; `unlike` defaults to `false`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub unlike: bool,
}

/// Query parameters for listing terms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTermsQuery {
    pub sort: Option<String>,
}
