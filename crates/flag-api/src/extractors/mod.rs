//! Axum extractors for request handling
//!
//! Custom extractors for client origin, JSON bodies, and term IDs.

mod body;
mod client_addr;
mod path;

pub use body::{JsonBody, OptionalJsonBody};
pub use client_addr::ClientAddr;
pub use path::TermIdPath;
