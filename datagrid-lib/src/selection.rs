//! Row selection state.

use std::collections::HashSet;
use std::hash::Hash;

/// Visual state of the "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    /// Nothing selected (or no rows).
    #[default]
    Unchecked,
    /// Some but not all rows selected.
    Indeterminate,
    /// Every row selected.
    Checked,
}

/// Tracks selected rows by key.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub enabled: bool,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create selection with no selection allowed.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            selected: HashSet::new(),
        }
    }

    /// Create multi-selection (checkbox style).
    pub fn multi() -> Self {
        Self {
            enabled: true,
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if !self.enabled {
            return false;
        }
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Replace the selection with `keys` (select all) or clear it.
    pub fn set_all(&mut self, checked: bool, keys: impl IntoIterator<Item = K>) {
        self.selected.clear();
        if checked && self.enabled {
            self.selected.extend(keys);
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Drop keys that are not in `valid`. Returns how many were dropped.
    pub fn retain_known(&mut self, valid: &HashSet<K>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|key| valid.contains(key));
        before - self.selected.len()
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Header checkbox state against a universe of `total` rows.
    pub fn check_state(&self, total: usize) -> CheckState {
        let count = self.selected.len();
        if total > 0 && count == total {
            CheckState::Checked
        } else if count > 0 && count < total {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::multi();
        assert!(selection.toggle("a".to_string()));
        assert!(selection.is_selected(&"a".to_string()));
        assert!(!selection.toggle("a".to_string()));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_disabled_ignores_changes() {
        let mut selection: Selection<String> = Selection::disabled();
        assert!(!selection.toggle("a".to_string()));
        selection.set_all(true, keys(&["a", "b"]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_set_all_replaces() {
        let mut selection = Selection::multi();
        selection.toggle("stale".to_string());
        selection.set_all(true, keys(&["a", "b"]));
        assert_eq!(selection.selected, keys(&["a", "b"]));
        selection.set_all(false, keys(&["a", "b"]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_check_state() {
        let mut selection = Selection::multi();
        assert_eq!(selection.check_state(0), CheckState::Unchecked);
        assert_eq!(selection.check_state(2), CheckState::Unchecked);
        selection.toggle("a".to_string());
        assert_eq!(selection.check_state(2), CheckState::Indeterminate);
        selection.toggle("b".to_string());
        assert_eq!(selection.check_state(2), CheckState::Checked);
    }

    #[test]
    fn test_retain_known() {
        let mut selection = Selection::multi();
        selection.set_all(true, keys(&["a", "b", "c"]));
        assert_eq!(selection.retain_known(&keys(&["b", "z"])), 2);
        assert_eq!(selection.selected, keys(&["b"]));
    }
}
