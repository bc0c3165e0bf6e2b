//! Feed ordering

use std::fmt;

use super::reaction::Counter;

/// Ordering for term listings.
///
/// Every variant orders by `created_at DESC, id DESC` after its primary key,
/// so ties between equal counters are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TermSort {
    #[default]
    Recent,
    Green,
    Red,
    Liked,
}

impl TermSort {
    pub const ALL: [Self; 4] = [Self::Recent, Self::Green, Self::Red, Self::Liked];

    /// Parse a client-supplied sort key. Unknown or missing keys fall back to
    /// [`TermSort::Recent`]; this never fails.
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some(k) if k.eq_ignore_ascii_case("green") => Self::Green,
            Some(k) if k.eq_ignore_ascii_case("red") => Self::Red,
            Some(k) if k.eq_ignore_ascii_case("liked") => Self::Liked,
            _ => Self::Recent,
        }
    }

    /// Counter used as the primary sort key, if any
    pub const fn counter(self) -> Option<Counter> {
        match self {
            Self::Recent => None,
            Self::Green => Some(Counter::GreenFlags),
            Self::Red => Some(Counter::RedFlags),
            Self::Liked => Some(Counter::Likes),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Green => "green",
            Self::Red => "red",
            Self::Liked => "liked",
        }
    }
}

impl fmt::Display for TermSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
