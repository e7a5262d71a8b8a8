//! Table configuration

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::pagination::DEFAULT_PAGE_SIZE_OPTIONS;

/// Visual weight of a bulk action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    /// Primary button.
    #[default]
    Default,
    /// Secondary button.
    Secondary,
    /// Outlined button.
    Outline,
    /// Red, irreversible action.
    Destructive,
}

/// An action offered for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    /// Identifier passed to `on_bulk_action`.
    pub value: String,
    /// Button label.
    pub label: String,
    /// Button style.
    #[serde(default)]
    pub variant: ActionVariant,
}

impl BulkAction {
    /// Creates a bulk action.
    pub fn new(value: impl Into<String>, label: impl Into<String>, variant: ActionVariant) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            variant,
        }
    }
}

/// Configuration for a table instance.
///
/// Loads from JSON with camelCase keys; the debounce delay is given in
/// milliseconds as `debounceMs`. Missing keys take their defaults.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use datagrid_lib::config::TableConfig;
///
/// let config = TableConfig::default()
///     .with_row_selection(true)
///     .with_export_prefix("users-export")
///     .with_debounce(Duration::from_millis(150));
///
/// assert!(!config.server_side_filtering);
/// assert_eq!(config.page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Quiet period before a search is emitted.
    ///
    /// Default: 300ms
    #[serde(rename = "debounceMs", with = "duration_ms")]
    pub debounce: Duration,

    /// `true`: the owner re-fetches on each query and the engine shows data
    /// as given. `false`: the engine searches, filters, sorts and pages the
    /// data itself.
    ///
    /// Default: false
    pub server_side_filtering: bool,

    /// Show row checkboxes and allow bulk actions.
    pub row_selection: bool,

    /// Allow CSV export.
    pub export_enabled: bool,

    /// Export filename prefix (`<prefix>-<date>.csv`); `export.csv` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_prefix: Option<String>,

    /// Initial page size for internal pagination.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Page sizes offered in the footer.
    pub page_size_options: Vec<usize>,

    /// Actions offered for the selection.
    pub bulk_actions: Vec<BulkAction>,

    /// Add button label; no add button when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_button_text: Option<String>,

    /// Search input placeholder.
    pub search_placeholder: String,

    /// Offer `Edit` in the row menu.
    pub editable: bool,

    /// Offer `Delete` in the row menu.
    pub deletable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            server_side_filtering: false,
            row_selection: false,
            export_enabled: false,
            export_prefix: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            bulk_actions: Vec::new(),
            add_button_text: None,
            search_placeholder: "Search...".to_string(),
            editable: false,
            deletable: false,
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search debounce delay.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Chooses server-side or client-side filtering.
    pub fn with_server_side_filtering(mut self, enabled: bool) -> Self {
        self.server_side_filtering = enabled;
        self
    }

    /// Enables or disables row selection.
    pub fn with_row_selection(mut self, enabled: bool) -> Self {
        self.row_selection = enabled;
        self
    }

    /// Enables or disables export.
    pub fn with_export(mut self, enabled: bool) -> Self {
        self.export_enabled = enabled;
        self
    }

    /// Enables export with a filename prefix.
    pub fn with_export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export_enabled = true;
        self.export_prefix = Some(prefix.into());
        self
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Adds a bulk action.
    pub fn with_bulk_action(mut self, action: BulkAction) -> Self {
        self.bulk_actions.push(action);
        self
    }

    /// Shows an add button with the given label.
    pub fn with_add_button(mut self, text: impl Into<String>) -> Self {
        self.add_button_text = Some(text.into());
        self
    }

    /// Enables the row menu's `Edit` and `Delete` entries.
    pub fn with_row_editing(mut self, editable: bool, deletable: bool) -> Self {
        self.editable = editable;
        self.deletable = deletable;
        self
    }

    /// Looks up a configured bulk action.
    pub fn bulk_action(&self, value: &str) -> Option<&BulkAction> {
        self.bulk_actions.iter().find(|a| a.value == value)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: TableConfig = serde_json::from_value(serde_json::json!({
            "debounceMs": 150,
            "rowSelection": true,
            "bulkActions": [
                { "value": "delete", "label": "Delete Selected", "variant": "destructive" },
                { "value": "activate", "label": "Activate Selected" }
            ]
        }))
        .unwrap();

        assert_eq!(config.debounce, Duration::from_millis(150));
        assert!(config.row_selection);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_placeholder, "Search...");
        assert_eq!(
            config.bulk_action("delete").map(|a| a.variant),
            Some(ActionVariant::Destructive)
        );
        assert_eq!(
            config.bulk_action("activate").map(|a| a.variant),
            Some(ActionVariant::Default)
        );
    }

    #[test]
    fn test_serialize_round_trips_debounce() {
        let config = TableConfig::default();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["debounceMs"], 300);
        let back: TableConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
