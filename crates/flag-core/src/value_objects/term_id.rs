//! Term identifiers
//!
//! 64-bit, time-ordered IDs laid out as:
//! - Bits 63-22: milliseconds since [`TermId::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Because the timestamp occupies the high bits, IDs from one generator sort
//! in insertion order, and `created_at` can be recovered from the ID itself.

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const WORKER_BITS: u8 = 10;
const SEQUENCE_BITS: u8 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;

/// Unique identifier of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TermId(i64);

impl TermId {
    /// 2025-01-01 00:00:00 UTC in milliseconds
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch encoded in this ID
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)) as u16
    }

    /// Creation time encoded in the ID
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_millis())
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn compose(millis: i64, worker_id: u16, sequence: i64) -> Self {
        Self(
            ((millis - Self::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                | (i64::from(worker_id) << SEQUENCE_BITS)
                | sequence,
        )
    }
}

/// Error when parsing a [`TermId`] from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TermIdParseError {
    #[error("invalid term id")]
    Invalid,
}

impl FromStr for TermId {
    type Err = TermIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| TermIdParseError::Invalid)
            .and_then(Self::try_from)
    }
}

impl TryFrom<i64> for TermId {
    type Error = TermIdParseError;

    /// Generated IDs are always positive
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(TermIdParseError::Invalid)
        }
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TermId> for i64 {
    fn from(id: TermId) -> Self {
        id.0
    }
}

// Strings on the wire: browsers lose precision above 2^53.
impl Serialize for TermId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TermId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Number(n) => Self::try_from(n).map_err(serde::de::Error::custom),
        }
    }
}

/// Generates strictly increasing [`TermId`]s for one worker.
///
/// If the wall clock stalls or steps backwards, the generator keeps issuing
/// IDs from its last timestamp instead of waiting, borrowing the next
/// millisecond once a sequence is exhausted.
pub struct TermIdGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

#[derive(Default)]
struct GeneratorState {
    last_millis: i64,
    sequence: i64,
}

impl TermIdGenerator {
    /// # Panics
    /// Panics if `worker_id` does not fit in 10 bits.
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: Mutex::new(GeneratorState::default()),
        }
    }

    pub fn generate(&self) -> TermId {
        let now = Utc::now().timestamp_millis().max(TermId::EPOCH);
        let mut state = self.state.lock();

        if now > state.last_millis {
            state.last_millis = now;
            state.sequence = 0;
        } else if state.sequence < MAX_SEQUENCE {
            state.sequence += 1;
        } else {
            state.last_millis += 1;
            state.sequence = 0;
        }

        TermId::compose(state.last_millis, self.worker_id, state.sequence)
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for TermIdGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
