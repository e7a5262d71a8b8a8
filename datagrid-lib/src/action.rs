//! Per-row action menu.

use std::fmt;
use std::sync::Arc;

use crate::model::Record;

/// Menu id of the built-in edit entry.
pub const EDIT_ACTION: &str = "edit";

/// Menu id of the built-in delete entry.
pub const DELETE_ACTION: &str = "delete";

/// Predicate evaluated per row.
pub type RowPredicate = Arc<dyn Fn(&Record) -> bool + Send + Sync>;

/// A custom entry in the row action menu.
///
/// # Example
///
/// ```
/// use datagrid_lib::action::RowAction;
///
/// let approve = RowAction::new("approve", "Approve")
///     .disabled_when(|record| record.display("status") == "approved");
/// ```
#[derive(Clone)]
pub struct RowAction {
    /// Identifier passed to `on_row_action`.
    pub id: String,
    /// Menu label.
    pub label: String,
    /// Draw a separator before this entry.
    pub separator: bool,
    disabled: Option<RowPredicate>,
    hidden: Option<RowPredicate>,
}

impl RowAction {
    /// Creates a row action.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            separator: false,
            disabled: None,
            hidden: None,
        }
    }

    /// Draws a separator before this entry.
    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }

    /// Disables the entry for rows matching `predicate`.
    pub fn disabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    /// Hides the entry for rows matching `predicate`.
    pub fn hidden_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.hidden = Some(Arc::new(predicate));
        self
    }

    /// Returns `true` if the entry is disabled for `record`.
    pub fn is_disabled(&self, record: &Record) -> bool {
        self.disabled.as_ref().is_some_and(|p| p(record))
    }

    /// Returns `true` if the entry is hidden for `record`.
    pub fn is_hidden(&self, record: &Record) -> bool {
        self.hidden.as_ref().is_some_and(|p| p(record))
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

/// One rendered entry of a row's action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMenuItem {
    /// Action id (`edit`, `delete` or a custom id).
    pub id: String,
    /// Label.
    pub label: String,
    /// Whether the entry can be chosen.
    pub enabled: bool,
    /// Draw a separator before this entry.
    pub separator_before: bool,
    /// Styled as destructive.
    pub destructive: bool,
}

/// Builds the menu for a row: `Edit`, custom actions, then `Delete`.
pub fn row_menu(
    record: &Record,
    actions: &[RowAction],
    editable: bool,
    deletable: bool,
) -> Vec<RowMenuItem> {
    let mut items = Vec::new();
    if editable {
        items.push(RowMenuItem {
            id: EDIT_ACTION.to_string(),
            label: "Edit".to_string(),
            enabled: true,
            separator_before: false,
            destructive: false,
        });
    }
    for action in actions.iter().filter(|a| !a.is_hidden(record)) {
        items.push(RowMenuItem {
            id: action.id.clone(),
            label: action.label.clone(),
            enabled: !action.is_disabled(record),
            separator_before: action.separator,
            destructive: false,
        });
    }
    if deletable {
        items.push(RowMenuItem {
            id: DELETE_ACTION.to_string(),
            label: "Delete".to_string(),
            enabled: true,
            separator_before: !items.is_empty(),
            destructive: true,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let record = Record::new("1").set("status", "draft");
        let actions = vec![
            RowAction::new("approve", "Approve"),
            RowAction::new("archive", "Archive").hidden_when(|r| r.display("status") == "draft"),
        ];

        let ids: Vec<_> = row_menu(&record, &actions, true, true)
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, ["edit", "approve", "delete"]);
    }

    #[test]
    fn test_delete_separator_only_after_other_entries() {
        let record = Record::new("1");
        let menu = row_menu(&record, &[], false, true);
        assert_eq!(menu.len(), 1);
        assert!(!menu[0].separator_before);
        assert!(menu[0].destructive);

        let menu = row_menu(&record, &[], true, true);
        assert!(menu[1].separator_before);
    }

    #[test]
    fn test_disabled_entry() {
        let record = Record::new("1").set("status", "approved");
        let actions = vec![RowAction::new("approve", "Approve")
            .disabled_when(|r| r.display("status") == "approved")];
        let menu = row_menu(&record, &actions, false, false);
        assert!(!menu[0].enabled);
    }
}
