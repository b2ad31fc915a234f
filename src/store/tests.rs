//! Store Module Tests
//!
//! Validates identifier syntax, document lifecycle mechanics, and the
//! aggregate statistics the health endpoint reports.
//!
//! ## Test Scopes
//! - **SetId**: Generation and the 24-hex syntax check.
//! - **SetStore**: Create/fetch/replace/remove semantics, the touch-on-access
//!   timestamp policy, and the never-empty invariant.
//! - **Stats**: Totals and the recency-ordered, capped recent list.

#[cfg(test)]
mod tests {
    use crate::store::memory::SetStore;
    use crate::store::types::{SetId, StoreError};
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    // ============================================================
    // SET ID TESTS
    // ============================================================

    #[test]
    fn test_new_id_is_24_lowercase_hex() {
        let id = SetId::new();

        assert_eq!(id.0.len(), 24);
        assert!(
            id.0.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()),
            "Generated id should be lowercase hex, got: {}",
            id.0
        );
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = SetId::new();
        let b = SetId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_accepts_valid_id() {
        let id = SetId::parse("0123456789abcdef01234567");
        assert_eq!(id, Some(SetId("0123456789abcdef01234567".to_string())));
    }

    #[test]
    fn test_parse_normalizes_uppercase() {
        let id = SetId::parse("0123456789ABCDEF01234567");
        assert_eq!(id, Some(SetId("0123456789abcdef01234567".to_string())));
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        // Wrong length
        assert_eq!(SetId::parse(""), None);
        assert_eq!(SetId::parse("abc123"), None);
        assert_eq!(SetId::parse("0123456789abcdef0123456"), None);
        assert_eq!(SetId::parse("0123456789abcdef012345678"), None);

        // Right length, wrong characters
        assert_eq!(SetId::parse("0123456789abcdef0123456z"), None);
        assert_eq!(SetId::parse("not-a-hex-identifier-:-("), None);
    }

    // ============================================================
    // LIFECYCLE TESTS
    // ============================================================

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let store = SetStore::new();

        let set = store.create(vec![json!("a"), json!("b")]).unwrap();

        assert_eq!(set.id.0.len(), 24);
        assert_eq!(set.stickies.len(), 2);
        assert_eq!(
            set.created_at, set.last_accessed,
            "Both timestamps should start equal"
        );
    }

    #[test]
    fn test_create_rejects_empty_sequence() {
        let store = SetStore::new();

        let result = store.create(vec![]);
        assert_eq!(result.unwrap_err(), StoreError::EmptyStickies);
    }

    #[test]
    fn test_fetch_returns_same_sequence() {
        let store = SetStore::new();
        let created = store
            .create(vec![json!({"text": "hello"}), json!(42)])
            .unwrap();

        let fetched = store.fetch(&created.id).unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.stickies, created.stickies);
        assert!(fetched.last_accessed >= fetched.created_at);
    }

    #[test]
    fn test_fetch_missing_id() {
        let store = SetStore::new();
        let id = SetId::new();

        assert_eq!(store.fetch(&id).unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_fetch_touches_last_accessed() {
        let store = SetStore::new();
        let created = store.create(vec![json!("a")]).unwrap();

        sleep(Duration::from_millis(5));
        let first = store.fetch(&created.id).unwrap();
        assert!(
            first.last_accessed > created.last_accessed,
            "Fetch should advance last_accessed"
        );

        sleep(Duration::from_millis(5));
        let second = store.fetch(&created.id).unwrap();
        assert!(
            second.last_accessed > first.last_accessed,
            "Each fetch should advance last_accessed again"
        );
        assert_eq!(second.stickies, first.stickies, "Content is idempotent");
    }

    #[test]
    fn test_replace_overwrites_wholesale() {
        let store = SetStore::new();
        let created = store.create(vec![json!("a"), json!("b")]).unwrap();

        sleep(Duration::from_millis(5));
        let replaced = store.replace(&created.id, vec![json!("c")]).unwrap();

        assert_eq!(replaced.stickies, vec![json!("c")]);
        assert_eq!(replaced.created_at, created.created_at, "created_at is immutable");
        assert!(replaced.last_accessed > created.last_accessed);
    }

    #[test]
    fn test_replace_rejects_empty_sequence() {
        let store = SetStore::new();
        let created = store.create(vec![json!("a"), json!("b")]).unwrap();

        let result = store.replace(&created.id, vec![]);
        assert_eq!(result.unwrap_err(), StoreError::EmptyStickies);

        // Entity unchanged
        let fetched = store.fetch(&created.id).unwrap();
        assert_eq!(fetched.stickies.len(), 2);
    }

    #[test]
    fn test_replace_missing_id() {
        let store = SetStore::new();

        let result = store.replace(&SetId::new(), vec![json!("a")]);
        assert_eq!(result.unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn test_remove_returns_former_state() {
        let store = SetStore::new();
        let created = store.create(vec![json!("a"), json!("b"), json!("c")]).unwrap();

        let removed = store.remove(&created.id).unwrap();
        assert_eq!(removed.stickies.len(), 3);

        assert_eq!(store.fetch(&created.id).unwrap_err(), StoreError::NotFound);
        assert_eq!(store.remove(&created.id).unwrap_err(), StoreError::NotFound);
    }

    // ============================================================
    // STATS TESTS
    // ============================================================

    #[test]
    fn test_stats_empty_store() {
        let store = SetStore::new();
        let stats = store.stats();

        assert_eq!(stats.total_sets, 0);
        assert_eq!(stats.total_stickies, 0);
        assert!(stats.recent.is_empty());
    }

    #[test]
    fn test_stats_totals() {
        let store = SetStore::new();
        store.create(vec![json!("a"), json!("b")]).unwrap();
        store.create(vec![json!("c")]).unwrap();
        store.create(vec![json!("d"), json!("e"), json!("f")]).unwrap();

        let stats = store.stats();

        assert_eq!(stats.total_sets, 3);
        assert_eq!(
            stats.total_stickies, 6,
            "totalStickies should be the sum of sequence lengths"
        );
    }

    #[test]
    fn test_stats_does_not_touch_last_accessed() {
        let store = SetStore::new();
        let created = store.create(vec![json!("a")]).unwrap();

        sleep(Duration::from_millis(5));
        store.stats();

        let stats = store.stats();
        assert_eq!(
            stats.recent[0].last_accessed, created.last_accessed,
            "Reading aggregates must not count as access to any set"
        );
    }

    #[test]
    fn test_stats_recent_ordered_by_recency_and_capped() {
        let store = SetStore::new();

        let mut ids = Vec::new();
        for i in 0..7 {
            let set = store.create(vec![json!(i)]).unwrap();
            ids.push(set.id);
            sleep(Duration::from_millis(2));
        }

        // Touch the oldest set so it becomes the most recent.
        store.fetch(&ids[0]).unwrap();

        let stats = store.stats();

        assert_eq!(stats.recent.len(), 5, "Recent list is capped at five");
        assert_eq!(
            stats.recent[0].id, ids[0],
            "The just-touched set should lead the recent list"
        );
        for window in stats.recent.windows(2) {
            assert!(
                window[0].last_accessed >= window[1].last_accessed,
                "Recent list should be ordered by recency descending"
            );
        }
    }
}
