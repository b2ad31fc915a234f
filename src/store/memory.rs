use super::types::{RecentSet, SetId, StickySet, StoreError, StoreStats};

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;

/// Number of sets reported in the `recent` section of [`SetStore::stats`].
const RECENT_LIMIT: usize = 5;

/// In-memory single-collection document store for sticky sets.
///
/// Each operation is one atomic document write guarded by the map's per-entry
/// locking; there are no cross-document transactions and no retries. Requests
/// run in parallel and serialize only where they touch the same document.
pub struct SetStore {
    sets: DashMap<SetId, StickySet>,
}

impl SetStore {
    pub fn new() -> Self {
        Self {
            sets: DashMap::new(),
        }
    }

    /// Stores a new set with a freshly assigned identifier.
    ///
    /// Both timestamps start at the current time. An empty sequence is
    /// rejected: creation is the only way a set comes into existence, and a
    /// set never exists without at least one note value.
    pub fn create(&self, stickies: Vec<Value>) -> Result<StickySet, StoreError> {
        if stickies.is_empty() {
            return Err(StoreError::EmptyStickies);
        }

        let now = Utc::now();
        loop {
            let id = SetId::new();
            match self.sets.entry(id.clone()) {
                // Twelve random bytes colliding is vanishingly rare; draw again.
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let set = StickySet {
                        id,
                        stickies,
                        created_at: now,
                        last_accessed: now,
                    };
                    slot.insert(set.clone());
                    return Ok(set);
                }
            }
        }
    }

    /// Returns a set by id, advancing `last_accessed` as a side effect.
    ///
    /// The touch is part of the read contract ("touch on access"), so every
    /// successful fetch is also a document write.
    pub fn fetch(&self, id: &SetId) -> Result<StickySet, StoreError> {
        let mut doc = self.sets.get_mut(id).ok_or(StoreError::NotFound)?;
        doc.last_accessed = Utc::now();
        Ok(doc.value().clone())
    }

    /// Overwrites the note sequence wholesale and advances `last_accessed`.
    ///
    /// No merge, no per-element diffing. An empty replacement is rejected;
    /// callers that want an empty set must delete it instead.
    pub fn replace(&self, id: &SetId, stickies: Vec<Value>) -> Result<StickySet, StoreError> {
        if stickies.is_empty() {
            return Err(StoreError::EmptyStickies);
        }

        let mut doc = self.sets.get_mut(id).ok_or(StoreError::NotFound)?;
        doc.stickies = stickies;
        doc.last_accessed = Utc::now();
        Ok(doc.value().clone())
    }

    /// Permanently removes a set, returning its former state.
    pub fn remove(&self, id: &SetId) -> Result<StickySet, StoreError> {
        self.sets
            .remove(id)
            .map(|(_, set)| set)
            .ok_or(StoreError::NotFound)
    }

    /// Aggregate statistics over all stored sets.
    ///
    /// This is the one read path that does not touch `last_accessed`; it
    /// observes the collection without counting as access to any set.
    pub fn stats(&self) -> StoreStats {
        let mut recent: Vec<RecentSet> = self
            .sets
            .iter()
            .map(|entry| RecentSet {
                id: entry.id.clone(),
                stickies_count: entry.stickies.len(),
                last_accessed: entry.last_accessed,
            })
            .collect();

        let total_sets = recent.len();
        let total_stickies = recent.iter().map(|set| set.stickies_count).sum();

        recent.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));
        recent.truncate(RECENT_LIMIT);

        StoreStats {
            total_sets,
            total_stickies,
            recent,
        }
    }
}

impl Default for SetStore {
    fn default() -> Self {
        Self::new()
    }
}
