//! Column descriptors.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ColumnError;
use crate::model::Record;
use crate::model::Value;
use crate::query::ALL_FILTER_VALUE;
use crate::query::RESERVED_QUERY_KEYS;

/// Strategy for rendering a cell: `(value, record) -> text`.
///
/// The value is [`Value::Null`] when the record has no field for the column.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Kind of filter control a column offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Dropdown over fixed options, matched by exact value.
    Select,
    /// Calendar date, matched by day.
    Date,
    /// Number, matched by numeric equality.
    Number,
}

/// One option of a select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value stored in the filter map and sent in the query.
    pub value: String,
    /// Label shown to the user.
    pub label: String,
}

impl FilterOption {
    /// Creates a filter option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Describes one column of the table.
///
/// Descriptors are immutable once handed to the engine. Everything except
/// the render strategy can be loaded from JSON:
///
/// ```json
/// { "key": "status", "title": "Status", "sortable": true,
///   "filterType": "select",
///   "filterOptions": [{ "value": "active", "label": "Active" }] }
/// ```
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{Column, FilterOption};
///
/// let column = Column::new("status", "Status")
///     .sortable()
///     .select_filter([FilterOption::new("active", "Active")]);
///
/// assert!(column.is_filterable());
/// assert_eq!(column.filter_choices()[0].label, "All Status");
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Field identifier, also the record field the column reads.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether clicking the header sorts by this column.
    #[serde(default)]
    pub sortable: bool,
    /// Whether client-side search looks at this column.
    #[serde(default)]
    pub searchable: bool,
    /// Hidden columns are neither rendered nor exported.
    #[serde(default)]
    pub hidden: bool,
    /// Preferred width, passed through to the view (e.g. `"120px"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Filter control kind, if the column is filterable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterKind>,
    /// Options for select filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_options: Vec<FilterOption>,
    #[serde(skip)]
    render: Option<CellRenderer>,
}

impl Column {
    /// Creates a plain column.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            searchable: false,
            hidden: false,
            width: None,
            filter_type: None,
            filter_options: Vec::new(),
            render: None,
        }
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column searchable.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Marks the column hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the preferred width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Adds a select filter with the given options.
    pub fn select_filter(mut self, options: impl IntoIterator<Item = FilterOption>) -> Self {
        self.filter_type = Some(FilterKind::Select);
        self.filter_options = options.into_iter().collect();
        self
    }

    /// Adds a date or number filter (no options).
    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter_type = Some(kind);
        self
    }

    /// Sets the render strategy for cells of this column.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Returns `true` if the column declares a filter.
    pub fn is_filterable(&self) -> bool {
        self.filter_type.is_some()
    }

    /// Returns the select options prefixed with the implicit
    /// `All <Title>` option.
    pub fn filter_choices(&self) -> Vec<FilterOption> {
        let mut choices = Vec::with_capacity(self.filter_options.len() + 1);
        choices.push(FilterOption::new(ALL_FILTER_VALUE, format!("All {}", self.title)));
        choices.extend(self.filter_options.iter().cloned());
        choices
    }

    /// Renders this column's cell for a record.
    ///
    /// Uses the render strategy when set; otherwise the value's display
    /// form, or `-` when the value is missing or null.
    pub fn render_cell(&self, record: &Record) -> String {
        let value = record.get(&self.key);
        match (&self.render, value) {
            (Some(render), Some(value)) => render(value, record),
            (Some(render), None) => render(&Value::Null, record),
            (None, Some(value)) if !value.is_null() => value.to_string(),
            (None, _) => "-".to_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("hidden", &self.hidden)
            .field("width", &self.width)
            .field("filter_type", &self.filter_type)
            .field("filter_options", &self.filter_options)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Checks that column keys are unique and do not shadow query fields.
pub fn validate_columns(columns: &[Column]) -> Result<(), ColumnError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if RESERVED_QUERY_KEYS.contains(&column.key.as_str()) {
            return Err(ColumnError::ReservedKey(column.key.clone()));
        }
        if !seen.insert(column.key.as_str()) {
            return Err(ColumnError::DuplicateKey(column.key.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cell_default() {
        let column = Column::new("name", "Name");
        let record = Record::new("1").set("name", "Ana");
        assert_eq!(column.render_cell(&record), "Ana");
        assert_eq!(column.render_cell(&Record::new("2")), "-");
        assert_eq!(column.render_cell(&Record::new("3").set("name", Value::Null)), "-");
    }

    #[test]
    fn test_render_cell_strategy() {
        let column = Column::new("amount", "Amount")
            .render(|value, record| format!("{} ({})", value, record.id()));
        let record = Record::new("7").set("amount", 120i64);
        assert_eq!(column.render_cell(&record), "120 (7)");
        assert_eq!(column.render_cell(&Record::new("8")), " (8)");
    }

    #[test]
    fn test_filter_choices() {
        let column = Column::new("status", "Status").select_filter([
            FilterOption::new("active", "Active"),
            FilterOption::new("inactive", "Inactive"),
        ]);
        let choices = column.filter_choices();
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0], FilterOption::new("all", "All Status"));
        assert_eq!(choices[2].value, "inactive");
    }

    #[test]
    fn test_validate_columns() {
        assert!(validate_columns(&[Column::new("a", "A"), Column::new("b", "B")]).is_ok());
        assert_eq!(
            validate_columns(&[Column::new("a", "A"), Column::new("a", "Again")]),
            Err(ColumnError::DuplicateKey("a".to_string()))
        );
        assert_eq!(
            validate_columns(&[Column::new("page", "Page")]),
            Err(ColumnError::ReservedKey("page".to_string()))
        );
    }

    #[test]
    fn test_deserialize() {
        let column: Column = serde_json::from_value(serde_json::json!({
            "key": "status",
            "title": "Status",
            "sortable": true,
            "filterType": "select",
            "filterOptions": [{ "value": "active", "label": "Active" }],
        }))
        .unwrap();

        assert!(column.sortable);
        assert!(!column.hidden);
        assert_eq!(column.filter_type, Some(FilterKind::Select));
        assert_eq!(column.filter_options.len(), 1);
    }
}
