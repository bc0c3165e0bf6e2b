//! Database models - SQLx-compatible structs for PostgreSQL tables

mod term;

pub use term::TermModel;
