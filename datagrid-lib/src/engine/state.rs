//! Engine state guarded by the engine lock.

use std::collections::HashSet;

use crate::column::Column;
use crate::model::Record;
use crate::pagination::Pagination;
use crate::query::FilterMap;
use crate::query::Sort;
use crate::query::TableQuery;
use crate::query::local;
use crate::selection::Selection;

/// Who owns the page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PageMode {
    /// The owner supplies the descriptor and is told about page changes.
    Controlled(Pagination),
    /// The engine slices the displayed rows itself.
    Internal { current: usize, page_size: usize },
}

/// Mutable state of one table instance.
#[derive(Debug)]
pub(super) struct EngineState {
    /// Rows as supplied by the owner.
    pub records: Vec<Record>,
    /// Owner-set loading flag.
    pub loading: bool,
    /// Search input text.
    pub search: String,
    /// Active sort.
    pub sort: Option<Sort>,
    /// Active column filters.
    pub filters: FilterMap,
    /// Selected row ids.
    pub selection: Selection<String>,
    /// Filter dialog visibility.
    pub filter_dialog_open: bool,
    /// Page position.
    pub pages: PageMode,
    /// Sequence number of the last emitted query.
    pub sequence: u64,
    /// Bulk action awaiting its handler.
    pub bulk_in_flight: Option<String>,
}

impl EngineState {
    pub fn new(row_selection: bool, page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            search: String::new(),
            sort: None,
            filters: FilterMap::new(),
            selection: if row_selection {
                Selection::multi()
            } else {
                Selection::disabled()
            },
            filter_dialog_open: false,
            pages: PageMode::Internal {
                current: 1,
                page_size,
            },
            sequence: 0,
            bulk_in_flight: None,
        }
    }

    /// Composes the query for the current state and restarts from page 1.
    pub fn compose_query(&mut self) -> TableQuery {
        self.sequence += 1;
        match &mut self.pages {
            PageMode::Controlled(pagination) => pagination.current = 1,
            PageMode::Internal { current, .. } => *current = 1,
        }
        TableQuery {
            search: self.search.clone(),
            sort_by: self.sort.as_ref().map(|s| s.field.clone()),
            sort_order: self.sort.as_ref().map(|s| s.direction),
            filters: self.filters.as_map().clone(),
            page: 1,
            limit: Some(self.page_size()),
            sequence: self.sequence,
        }
    }

    pub fn page_size(&self) -> usize {
        match self.pages {
            PageMode::Controlled(pagination) => pagination.page_size,
            PageMode::Internal { page_size, .. } => page_size,
        }
    }

    /// Rows after search, filters and sort, before paging.
    pub fn matched<'a>(&'a self, columns: &[Column], server_side: bool) -> Vec<&'a Record> {
        if server_side {
            return self.records.iter().collect();
        }
        local::apply(
            &self.records,
            columns,
            &self.search,
            &self.filters,
            self.sort.as_ref(),
        )
    }

    /// Page position, with the internal total taken from `matched_count`.
    pub fn pagination(&self, matched_count: usize) -> Pagination {
        match self.pages {
            PageMode::Controlled(pagination) => pagination,
            PageMode::Internal { current, page_size } => {
                Pagination::new(current, page_size, matched_count)
            }
        }
    }

    /// Rows currently on screen.
    pub fn displayed<'a>(&'a self, columns: &[Column], server_side: bool) -> Vec<&'a Record> {
        let matched = self.matched(columns, server_side);
        match self.pages {
            PageMode::Controlled(_) => matched,
            PageMode::Internal { .. } => self.pagination(matched.len()).slice(&matched).to_vec(),
        }
    }

    /// Clamps the internal page and drops selected ids no longer on screen.
    ///
    /// Returns the number of ids dropped.
    pub fn reconcile(&mut self, columns: &[Column], server_side: bool) -> usize {
        if let PageMode::Internal { current, page_size } = self.pages {
            let page_count = self.pagination(self.matched(columns, server_side).len()).page_count();
            let clamped = current.min(page_count.max(1));
            self.pages = PageMode::Internal {
                current: clamped,
                page_size,
            };
        }

        let visible: HashSet<String> = self
            .displayed(columns, server_side)
            .into_iter()
            .map(|r| r.id().to_string())
            .collect();
        self.selection.retain_known(&visible)
    }

    /// Selected ids in display order.
    pub fn selected_in_order(&self, columns: &[Column], server_side: bool) -> Vec<String> {
        self.displayed(columns, server_side)
            .into_iter()
            .filter(|r| self.selection.is_selected(&r.id().to_string()))
            .map(|r| r.id().to_string())
            .collect()
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }
}
