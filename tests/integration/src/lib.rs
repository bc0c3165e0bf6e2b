//! Integration test utilities for the flagboard API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over real TCP connections.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
