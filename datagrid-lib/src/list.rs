//! REST list endpoints: request URLs and response envelopes.
//!
//! List endpoints live under `/api/v1/<module>/<resource>/` and answer with
//! one of two envelopes:
//!
//! ```json
//! { "success": true, "message": "ok", "data": [ ... ] }
//! { "success": true, "data": { "data": [ ... ],
//!   "pagination": { "page": 2, "limit": 10, "total_rows": 31, "total_pages": 4 } } }
//! ```

use serde::Deserialize;
use url::Url;

use crate::error::ListError;
use crate::model::Record;
use crate::pagination::Pagination;
use crate::query::TableQuery;

/// A list resource such as `masterdata/users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    /// Module segment (`masterdata`, `hr`, `inventory`, ...).
    pub module: String,
    /// Resource segment (`users`, `warehouses`, ...).
    pub resource: String,
}

impl ResourcePath {
    /// Creates a resource path.
    pub fn new(module: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            resource: resource.into(),
        }
    }

    /// Returns `/api/v1/<module>/<resource>/`.
    pub fn path(&self) -> String {
        format!("/api/v1/{}/{}/", self.module, self.resource)
    }

    /// Builds the list URL on `base`, with the query's pairs when given.
    ///
    /// The path is absolute, so any path on `base` is replaced.
    pub fn url(&self, base: &str, query: Option<&TableQuery>) -> Result<Url, ListError> {
        let mut url = Url::parse(base)?.join(&self.path())?;
        if let Some(query) = query {
            url.query_pairs_mut().extend_pairs(query.query_pairs());
        }
        Ok(url)
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    /// Rows on this page.
    pub rows: Vec<Record>,
    /// Total rows across all pages.
    pub total: usize,
    /// Page number (1-based).
    pub page: usize,
    /// Page size, when the response states one.
    pub limit: Option<usize>,
}

impl ListPage {
    /// Parses a list response body.
    pub fn from_json_str(body: &str) -> Result<Self, ListError> {
        let envelope: Envelope = serde_json::from_str(body)?;
        Self::from_envelope(envelope)
    }

    /// Parses a list response already decoded as JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ListError> {
        let envelope: Envelope = serde_json::from_value(value)?;
        Self::from_envelope(envelope)
    }

    /// Returns the pagination descriptor for this page, falling back to
    /// `page_size` when the response states no limit.
    pub fn pagination(&self, page_size: usize) -> Pagination {
        Pagination::new(self.page, self.limit.unwrap_or(page_size), self.total)
    }

    fn from_envelope(envelope: Envelope) -> Result<Self, ListError> {
        if !envelope.success {
            let message = envelope.message.unwrap_or_else(|| "Request failed".to_string());
            return Err(ListError::api(message));
        }

        match envelope.data {
            None => Ok(Self {
                rows: Vec::new(),
                total: 0,
                page: 1,
                limit: None,
            }),
            Some(EnvelopeData::Rows(items)) => {
                let rows = parse_rows(items)?;
                let count = rows.len();
                Ok(Self {
                    rows,
                    total: count,
                    page: 1,
                    limit: None,
                })
            }
            Some(EnvelopeData::Paginated { data, pagination }) => {
                let rows = parse_rows(data.unwrap_or_default())?;
                Ok(Self {
                    rows,
                    total: pagination.total_rows.unwrap_or(0),
                    page: pagination.page.filter(|p| *p > 0).unwrap_or(1),
                    limit: pagination.limit.filter(|l| *l > 0),
                })
            }
        }
    }
}

fn parse_rows(items: Vec<serde_json::Value>) -> Result<Vec<Record>, ListError> {
    items
        .into_iter()
        .map(|item| Record::from_json(item).map_err(ListError::from))
        .collect()
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<EnvelopeData>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeData {
    Rows(Vec<serde_json::Value>),
    Paginated {
        #[serde(default)]
        data: Option<Vec<serde_json::Value>>,
        pagination: PaginationInfo,
    },
}

#[derive(Debug, Deserialize)]
struct PaginationInfo {
    #[serde(default)]
    page: Option<usize>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    total_rows: Option<usize>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::query::Direction;

    #[test]
    fn test_legacy_envelope() {
        let page = ListPage::from_json(json!({
            "success": true,
            "message": "ok",
            "data": [{ "id": "1", "name": "A" }, { "id": "2", "name": "B" }],
        }))
        .unwrap();

        assert_eq!(page.rows.len(), 2);
        assert_eq!((page.total, page.page, page.limit), (2, 1, None));
        assert_eq!(page.pagination(20), Pagination::new(1, 20, 2));
    }

    #[test]
    fn test_paginated_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "data": [{ "id": "11", "name": "K" }],
                "pagination": { "page": 2, "limit": 10, "total_rows": 31, "total_pages": 4 }
            }
        }"#;
        let page = ListPage::from_json_str(body).unwrap();

        assert_eq!(page.rows[0].id(), "11");
        assert_eq!(page.pagination(50), Pagination::new(2, 10, 31));
        assert_eq!(page.pagination(50).page_count(), 4);
    }

    #[test]
    fn test_paginated_envelope_defaults() {
        let page = ListPage::from_json(json!({
            "success": true,
            "data": { "data": null, "pagination": { "page": 0 } },
        }))
        .unwrap();
        assert!(page.rows.is_empty());
        assert_eq!((page.total, page.page, page.limit), (0, 1, None));
    }

    #[test]
    fn test_failed_envelope() {
        let err = ListPage::from_json(json!({ "success": false, "message": "Forbidden" })).unwrap_err();
        assert!(matches!(err, ListError::Api { ref message } if message == "Forbidden"));
    }

    #[test]
    fn test_bad_record() {
        let err = ListPage::from_json(json!({ "success": true, "data": [{ "name": "no id" }] })).unwrap_err();
        assert!(matches!(err, ListError::Record(_)));
    }

    #[test]
    fn test_url() {
        let query = TableQuery {
            search: "jo".to_string(),
            sort_by: Some("name".to_string()),
            sort_order: Some(Direction::Asc),
            filters: BTreeMap::from([("status".to_string(), "active".to_string())]),
            page: 1,
            limit: Some(10),
            sequence: 1,
        };
        let url = ResourcePath::new("masterdata", "users")
            .url("https://erp.example.com/app/", Some(&query))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://erp.example.com/api/v1/masterdata/users/?search=jo&sortBy=name&sortOrder=asc&status=active&page=1&limit=10"
        );
    }
}
