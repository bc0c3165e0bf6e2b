//! Term entity - a submitted text entry and its reaction counters

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationErrors};

use crate::error::DomainError;
use crate::value_objects::{clamp_apply, Counter, CounterDelta, TermId};

/// Display name used when a submitter leaves the name blank
pub const DEFAULT_NAME: &str = "Anonymous";

/// Bounds on term text, in characters, after trimming
pub const TEXT_MIN_CHARS: usize = 5;
pub const TEXT_MAX_CHARS: usize = 300;

/// Upper bound on display name length, in characters, after trimming
pub const NAME_MAX_CHARS: usize = 40;

/// Term entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: TermId,
    pub text: String,
    pub name: String,
    pub green_flags: i32,
    pub red_flags: i32,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

impl Term {
    /// Create a fresh term with zeroed counters. `created_at` is taken from
    /// the ID so that creation times follow insertion order.
    pub fn from_draft(id: TermId, draft: TermDraft) -> Self {
        Self {
            id,
            text: draft.text,
            name: draft.name,
            green_flags: 0,
            red_flags: 0,
            likes: 0,
            created_at: id.created_at(),
        }
    }

    /// Current value of a counter
    pub fn counter(&self, counter: Counter) -> i32 {
        match counter {
            Counter::GreenFlags => self.green_flags,
            Counter::RedFlags => self.red_flags,
            Counter::Likes => self.likes,
        }
    }

    /// Apply a delta in place, clamping every counter at zero
    pub fn apply_delta(&mut self, delta: &CounterDelta) {
        self.green_flags = clamp_apply(self.green_flags, delta.green_flags);
        self.red_flags = clamp_apply(self.red_flags, delta.red_flags);
        self.likes = clamp_apply(self.likes, delta.likes);
    }
}

/// Validated input for a new term.
///
/// Construction trims both fields, substitutes [`DEFAULT_NAME`] for a missing
/// or blank name, and enforces the length bounds. Control characters other
/// than newline and tab are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TermDraft {
    #[validate(length(min = 5, max = 300, message = "Text must be 5-300 characters"))]
    text: String,

    #[validate(length(min = 1, max = 40, message = "Name must be at most 40 characters"))]
    name: String,
}

impl TermDraft {
    pub fn new(text: &str, name: Option<&str>) -> Result<Self, DomainError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let draft = Self {
            text: text.trim().to_string(),
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
        };

        draft
            .validate()
            .map_err(|errors| DomainError::ValidationError(describe(&errors)))?;

        if draft.text.chars().any(is_disallowed_control) {
            return Err(DomainError::ValidationError(
                "Text contains unsupported control characters".to_string(),
            ));
        }
        if draft.name.chars().any(char::is_control) {
            return Err(DomainError::ValidationError(
                "Name contains unsupported control characters".to_string(),
            ));
        }

        Ok(draft)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_disallowed_control(c: char) -> bool {
    c.is_control() && c != '\n' && c != '\t'
}

// Field order is fixed so the message is stable when both fields fail.
fn describe(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    let messages: Vec<&str> = ["text", "name"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_deref())
        .collect();

    if messages.is_empty() {
        "Invalid term".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(len: usize) -> String {
        "a".repeat(len)
    }

    #[test]
    fn test_text_length_boundaries() {
        assert!(TermDraft::new(&text_of(TEXT_MIN_CHARS - 1), None).is_err());
        assert!(TermDraft::new(&text_of(TEXT_MIN_CHARS), None).is_ok());
        assert!(TermDraft::new(&text_of(TEXT_MAX_CHARS), None).is_ok());
        assert!(TermDraft::new(&text_of(TEXT_MAX_CHARS + 1), None).is_err());
    }

    #[test]
    fn test_text_is_trimmed_before_length_check() {
        let draft = TermDraft::new("   abcd   ", None);
        assert!(draft.is_err(), "4 chars after trim must be rejected");

        let padded = format!("  {}  ", text_of(TEXT_MAX_CHARS));
        let draft = TermDraft::new(&padded, None).unwrap();
        assert_eq!(draft.text().chars().count(), TEXT_MAX_CHARS);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 15 bytes
        assert!(TermDraft::new("ひらがなだ", None).is_ok());
        // 300 multibyte characters
        assert!(TermDraft::new(&"é".repeat(TEXT_MAX_CHARS), None).is_ok());
    }

    #[test]
    fn test_name_defaults_and_trims() {
        let draft = TermDraft::new("hello there", None).unwrap();
        assert_eq!(draft.name(), DEFAULT_NAME);

        let draft = TermDraft::new("hello there", Some("   ")).unwrap();
        assert_eq!(draft.name(), DEFAULT_NAME);

        let draft = TermDraft::new("hello there", Some("  Sam  ")).unwrap();
        assert_eq!(draft.name(), "Sam");
    }

    #[test]
    fn test_name_length_boundary() {
        assert!(TermDraft::new("hello there", Some(&text_of(NAME_MAX_CHARS))).is_ok());

        let err = TermDraft::new("hello there", Some(&text_of(NAME_MAX_CHARS + 1))).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Name must be at most 40 characters"
        );
    }

    #[test]
    fn test_both_fields_invalid_message_is_stable() {
        let err = TermDraft::new("hey", Some(&text_of(41))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Text must be 5-300 characters; Name must be at most 40 characters"
        );
    }

    #[test]
    fn test_control_characters() {
        assert!(TermDraft::new("line one\nline two", None).is_ok());
        assert!(TermDraft::new("tab\tseparated", None).is_ok());
        assert!(TermDraft::new("bell\u{7} ringing", None).is_err());
        assert!(TermDraft::new("hello there", Some("Sam\u{0}")).is_err());
    }

    #[test]
    fn test_from_draft_zeroes_counters() {
        let id = TermId::new(1 << 22);
        let term = Term::from_draft(id, TermDraft::new("hello there", None).unwrap());
        assert_eq!(term.green_flags, 0);
        assert_eq!(term.red_flags, 0);
        assert_eq!(term.likes, 0);
        assert_eq!(term.created_at, id.created_at());
    }

    #[test]
    fn test_apply_delta_clamps() {
        let mut term = Term::from_draft(TermId::new(1), TermDraft::new("hello there", None).unwrap());
        term.apply_delta(&CounterDelta {
            green_flags: 1,
            red_flags: -1,
            likes: 0,
        });
        assert_eq!(term.green_flags, 1);
        assert_eq!(term.red_flags, 0);
        assert_eq!(term.counter(Counter::GreenFlags), 1);
    }
}
