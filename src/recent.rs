//! Recently launched profiles.
//!
//! Stored most-recent-first as full profile snapshots under
//! [`RECENT_PROFILES_KEY`]. Entries are de-duplicated by their
//! (group, name) pair, not by id.

use crate::storage::{KeyValueStore, read_json, write_json};
use par_term_config::Profile;

/// Storage key of the recent-profile list
pub const RECENT_PROFILES_KEY: &str = "recentProfiles";

/// Stored recents, truncated to `capacity`
pub fn load_recent(store: &dyn KeyValueStore, capacity: usize) -> Vec<Profile> {
    let mut recent: Vec<Profile> = read_json(store, RECENT_PROFILES_KEY);
    recent.truncate(capacity);
    recent
}

/// Move `profile` to the front of `recent`, dropping any entry in the same
/// (group, name) slot, then cap the list.
pub fn push_recent(mut recent: Vec<Profile>, profile: Profile, capacity: usize) -> Vec<Profile> {
    if capacity == 0 {
        return Vec::new();
    }
    recent.retain(|p| !p.same_slot(&profile));
    recent.insert(0, profile);
    recent.truncate(capacity);
    recent
}

/// Record a launch in the stored list
pub fn record_launch(store: &dyn KeyValueStore, profile: &Profile, capacity: usize) {
    let recent = push_recent(load_recent(store, capacity), profile.clone(), capacity);
    write_json(store, RECENT_PROFILES_KEY, &recent);
}

/// Forget every recent entry
pub fn clear_recent(store: &dyn KeyValueStore) {
    store.remove(RECENT_PROFILES_KEY);
}

/// Drop recent entries snapshotting the profile with `id`
pub fn forget_recent(store: &dyn KeyValueStore, id: &str) {
    let mut recent: Vec<Profile> = read_json(store, RECENT_PROFILES_KEY);
    let before = recent.len();
    recent.retain(|p| p.id.as_deref() != Some(id));
    if recent.len() != before {
        write_json(store, RECENT_PROFILES_KEY, &recent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn names(list: &[Profile]) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_push_recent_evicts_oldest() {
        let mut recent = Vec::new();
        for name in ["A", "B", "C", "D"] {
            recent = push_recent(recent, Profile::new("local", name), 3);
        }
        assert_eq!(names(&recent), vec!["D", "C", "B"]);
    }

    #[test]
    fn test_push_recent_moves_same_slot_to_front() {
        let recent = vec![
            Profile::new("local", "A"),
            Profile::new("local", "B").group("g"),
        ];
        let updated = push_recent(recent, Profile::new("ssh", "B").group("g").icon("x"), 3);
        assert_eq!(names(&updated), vec!["B", "A"]);
        assert_eq!(updated[0].icon.as_deref(), Some("x"));
    }

    #[test]
    fn test_same_name_other_group_is_distinct() {
        let recent = vec![Profile::new("local", "A").group("g1")];
        let updated = push_recent(recent, Profile::new("local", "A").group("g2"), 3);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_zero_capacity_clears() {
        let store = MemoryStore::new();
        record_launch(&store, &Profile::new("local", "A"), 3);
        record_launch(&store, &Profile::new("local", "B"), 0);
        assert!(load_recent(&store, 3).is_empty());
        assert_eq!(store.get(RECENT_PROFILES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_truncates_to_capacity() {
        let store = MemoryStore::new();
        for name in ["A", "B", "C"] {
            record_launch(&store, &Profile::new("local", name), 3);
        }
        assert_eq!(names(&load_recent(&store, 2)), vec!["C", "B"]);
    }

    #[test]
    fn test_forget_recent_by_id() {
        let store = MemoryStore::new();
        record_launch(&store, &Profile::new("local", "A").id("a"), 3);
        record_launch(&store, &Profile::new("local", "B").id("b"), 3);
        forget_recent(&store, "a");
        assert_eq!(names(&load_recent(&store, 3)), vec!["B"]);
    }
}
