//! The normalized query object emitted to `on_search`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Direction;

/// Query object composed from the table state.
///
/// Serializes to the shape list endpoints expect:
///
/// ```json
/// { "search": "ana", "sortBy": "name", "sortOrder": "asc",
///   "status": "active", "page": 1, "limit": 20 }
/// ```
///
/// `sortBy`/`sortOrder` are omitted while the table is unsorted and `limit`
/// is omitted when no page size is known. `page` is always `1`: any change to
/// search, sort or filters restarts from the first page.
///
/// The `sequence` number is not serialized. It increases with every
/// emission so callers can drop responses to superseded queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    /// Free-text search term.
    pub search: String,
    /// Sort column key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<Direction>,
    /// Active column filters.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
    /// Page number (1-based).
    pub page: usize,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Emission sequence number.
    #[serde(skip)]
    pub sequence: u64,
}

impl TableQuery {
    /// Returns the query as ordered `(name, value)` pairs for a URL.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 5);
        pairs.push(("search".to_string(), self.search.clone()));
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder".to_string(), order.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// Returns the URL-encoded query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}
