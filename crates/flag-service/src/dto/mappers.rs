//! Entity to DTO mappers

use flag_core::Term;

use super::responses::TermResponse;

impl From<&Term> for TermResponse {
    fn from(term: &Term) -> Self {
        Self {
            id: term.id.to_string(),
            text: term.text.clone(),
            name: term.name.clone(),
            green_flags: term.green_flags,
            red_flags: term.red_flags,
            likes: term.likes,
            created_at: term.created_at,
        }
    }
}

impl From<Term> for TermResponse {
    fn from(term: Term) -> Self {
        Self {
            id: term.id.to_string(),
            text: term.text,
            name: term.name,
            green_flags: term.green_flags,
            red_flags: term.red_flags,
            likes: term.likes,
            created_at: term.created_at,
        }
    }
}
