//! Reaction states and counter deltas
//!
//! Reactors are anonymous, so the server never knows who reacted. The client
//! reports the state it held before (`prev`) and the state it wants (`next`);
//! the transition between the two is turned into a [`CounterDelta`] that the
//! store applies in a single atomic update.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-state sentiment marker. `None` in an `Option<Flag>` means "no flag".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Green,
    Red,
}

impl Flag {
    /// Counter that tracks this flag
    pub const fn counter(self) -> Counter {
        match self {
            Self::Green => Counter::GreenFlags,
            Self::Red => Counter::RedFlags,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reaction counter stored on every term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    GreenFlags,
    RedFlags,
    Likes,
}

impl Counter {
    /// Column name in persistent storage
    pub const fn column(self) -> &'static str {
        match self {
            Self::GreenFlags => "green_flags",
            Self::RedFlags => "red_flags",
            Self::Likes => "likes",
        }
    }
}

/// Per-counter change applied to one term in one step.
///
/// Each component is added to its counter and the result clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterDelta {
    pub green_flags: i32,
    pub red_flags: i32,
    pub likes: i32,
}

impl CounterDelta {
    pub const ZERO: Self = Self {
        green_flags: 0,
        red_flags: 0,
        likes: 0,
    };

    /// A delta that touches exactly one counter
    pub fn single(counter: Counter, delta: i32) -> Self {
        Self::ZERO.with(counter, delta)
    }

    /// Delta for a flag toggle from `prev` to `next`.
    ///
    /// | prev  | next  | effect                 |
    /// |-------|-------|------------------------|
    /// | none  | green | green +1               |
    /// | none  | red   | red +1                 |
    /// | green | none  | green -1               |
    /// | red   | none  | red -1                 |
    /// | green | red   | green -1, red +1       |
    /// | red   | green | red -1, green +1       |
    /// | X     | X     | no change              |
    pub fn for_flag_transition(prev: Option<Flag>, next: Option<Flag>) -> Self {
        if prev == next {
            return Self::ZERO;
        }

        let mut delta = Self::ZERO;
        if let Some(flag) = prev {
            delta = delta.with(flag.counter(), -1);
        }
        if let Some(flag) = next {
            delta = delta.with(flag.counter(), 1);
        }
        delta
    }

    /// Delta for a like (`unlike == false`) or unlike (`unlike == true`)
    pub fn for_like(unlike: bool) -> Self {
        Self::single(Counter::Likes, if unlike { -1 } else { 1 })
    }

    pub fn get(&self, counter: Counter) -> i32 {
        match counter {
            Counter::GreenFlags => self.green_flags,
            Counter::RedFlags => self.red_flags,
            Counter::Likes => self.likes,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn with(mut self, counter: Counter, delta: i32) -> Self {
        let slot = match counter {
            Counter::GreenFlags => &mut self.green_flags,
            Counter::RedFlags => &mut self.red_flags,
            Counter::Likes => &mut self.likes,
        };
        *slot = slot.saturating_add(delta);
        self
    }
}

/// Apply one delta component to a counter value, clamping at zero
#[inline]
pub fn clamp_apply(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).max(0)
}
