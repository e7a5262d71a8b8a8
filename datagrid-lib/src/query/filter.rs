//! Column filter map.

use std::collections::BTreeMap;

use super::ALL_FILTER_VALUE;

/// Active column filters, keyed by column key.
///
/// The map only ever holds real filter values: setting the `"all"`
/// sentinel or an empty string removes the key instead of storing it, so the
/// emitted query stays minimal.
///
/// # Example
///
/// ```
/// use datagrid_lib::query::FilterMap;
///
/// let mut filters = FilterMap::new();
/// filters.set("status", "active");
/// assert_eq!(filters.get("status"), Some("active"));
///
/// filters.set("status", "all");
/// assert!(filters.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterMap {
    values: BTreeMap<String, String>,
}

impl FilterMap {
    /// Creates an empty filter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or removes a filter. Returns `true` if the map changed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if value.is_empty() || value == ALL_FILTER_VALUE {
            return self.values.remove(&key).is_some();
        }
        match self.values.get(&key) {
            Some(existing) if *existing == value => false,
            _ => {
                self.values.insert(key, value);
                true
            }
        }
    }

    /// Returns the filter value for a column.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Removes every filter. Returns `true` if any were set.
    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    /// Number of active filters (the badge count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates active filters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_removes_key() {
        let mut filters = FilterMap::new();
        assert!(filters.set("status", "active"));
        assert!(filters.set("status", "all"));
        assert_eq!(filters.get("status"), None);
        assert!(!filters.set("status", "all"));
    }

    #[test]
    fn test_empty_value_removes_key() {
        let mut filters = FilterMap::new();
        filters.set("type", "retail");
        assert!(filters.set("type", ""));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut filters = FilterMap::new();
        assert!(filters.set("status", "active"));
        assert!(!filters.set("status", "active"));
        assert!(filters.set("status", "inactive"));
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut filters = FilterMap::new();
        assert!(!filters.clear());
        filters.set("a", "1");
        filters.set("b", "2");
        assert!(filters.clear());
        assert_eq!(filters.len(), 0);
    }
}
