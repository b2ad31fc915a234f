//! Persistence API Wire Protocol
//!
//! Defines the JSON Data Transfer Objects (DTOs) exchanged between the
//! persistence API and its clients, including the board's own API client.
//!
//! All field names are camelCase on the wire; timestamps serialize as RFC 3339
//! strings.

use crate::store::types::{RecentSet, SetId, StickySet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full representation of a stored sticky set.
///
/// Returned by create (201), fetch (200) and replace (200). The `id` is the
/// only field a well-behaved client needs after a save; note content is never
/// pushed back into an editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickySetResponse {
    pub id: SetId,
    pub stickies: Vec<Value>,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

impl From<StickySet> for StickySetResponse {
    fn from(set: StickySet) -> Self {
        Self {
            id: set.id,
            stickies: set.stickies,
            created_at: set.created_at,
            last_accessed: set.last_accessed,
        }
    }
}

/// Acknowledgment for a successful delete, reporting what was removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub id: SetId,
    pub stickies_count: usize,
}

/// One entry in the health report's recently-accessed list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentStickies {
    pub id: SetId,
    pub stickies_count: usize,
    pub last_accessed: DateTime<Utc>,
}

impl From<RecentSet> for RecentStickies {
    fn from(set: RecentSet) -> Self {
        Self {
            id: set.id,
            stickies_count: set.stickies_count,
            last_accessed: set.last_accessed,
        }
    }
}

/// Aggregate statistics returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub total_stickies_collections: usize,
    pub total_stickies: usize,
    /// The five most recently accessed sets, recency descending.
    pub recent_stickies: Vec<RecentStickies>,
}

/// Uniform error body: every rejection carries a single human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
