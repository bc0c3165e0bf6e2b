//! Term entity <-> model mapper

use chrono::{DateTime, Utc};
use flag_core::{Term, TermId};

use crate::models::TermModel;

/// Convert TermModel to Term entity
impl From<TermModel> for Term {
    fn from(model: TermModel) -> Self {
        Term {
            id: TermId::new(model.id),
            text: model.text,
            name: model.name,
            green_flags: model.green_flags,
            red_flags: model.red_flags,
            likes: model.likes,
            created_at: model.created_at,
        }
    }
}

/// Term values bound into an INSERT
pub struct TermInsert<'a> {
    pub id: i64,
    pub text: &'a str,
    pub name: &'a str,
    pub green_flags: i32,
    pub red_flags: i32,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

impl<'a> TermInsert<'a> {
    pub fn new(term: &'a Term) -> Self {
        Self {
            id: term.id.into_inner(),
            text: &term.text,
            name: &term.name,
            green_flags: term.green_flags,
            red_flags: term.red_flags,
            likes: term.likes,
            created_at: term.created_at,
        }
    }
}
