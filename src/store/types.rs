use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Unique identifier for a sticky set.
///
/// Wrapper around a 24-character lowercase hex string, assigned by the store
/// at creation and immutable afterwards. The syntax doubles as the format
/// check for identifiers arriving over HTTP: anything that is not exactly
/// 24 ASCII hex digits is rejected before the store is consulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SetId(pub String);

impl SetId {
    /// Generates a new random identifier from 12 random bytes.
    pub fn new() -> Self {
        let bytes: [u8; 12] = rand::random();
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Parses an identifier, accepting exactly 24 ASCII hex digits.
    ///
    /// Mixed-case input is accepted and normalized to lowercase so lookups
    /// behave the same regardless of how the client cased the id.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == 24 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted sticky set, the only entity the store knows about.
///
/// `stickies` is an ordered sequence of arbitrary JSON values; the store never
/// inspects the elements. The sequence is never persisted empty: an update
/// that would leave it empty must delete the whole document instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickySet {
    pub id: SetId,
    pub stickies: Vec<Value>,
    /// Set once at creation, never modified.
    pub created_at: DateTime<Utc>,
    /// Advanced on every successful read or write. Always >= `created_at`.
    pub last_accessed: DateTime<Utc>,
}

/// Summary of one set as reported by [`SetStore::stats`](super::memory::SetStore::stats).
#[derive(Debug, Clone)]
pub struct RecentSet {
    pub id: SetId,
    pub stickies_count: usize,
    pub last_accessed: DateTime<Utc>,
}

/// Aggregate store statistics for the health endpoint.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub total_sets: usize,
    pub total_stickies: usize,
    /// The most recently accessed sets, recency descending, capped at five.
    pub recent: Vec<RecentSet>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("sticky set not found")]
    NotFound,
    #[error("sticky sets cannot be stored with an empty note sequence")]
    EmptyStickies,
}
