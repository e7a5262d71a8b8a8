//! User interactions: search, sort, filters, selection and paging.

use std::sync::Arc;

use super::PageMode;
use super::TableEngine;
use super::emit;
use crate::error::ColumnError;
use crate::error::SelectionError;
use crate::error::TableError;
use crate::pagination::Pagination;
use crate::query::FilterMap;
use crate::query::Sort;
use crate::query::TableQuery;
use crate::selection::CheckState;

impl TableEngine {
    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Updates the search text and (re)starts the debounce timer.
    ///
    /// The query is emitted once the text has been unchanged for the
    /// configured delay, composed from the state at that moment. Setting the
    /// current text again does nothing.
    ///
    /// Must be called within a Tokio runtime; otherwise the text is still
    /// stored but [`TableError::NoRuntime`] is returned and nothing is
    /// scheduled.
    pub fn set_search(&self, text: impl Into<String>) -> Result<(), TableError> {
        let text = text.into();
        {
            let mut state = self.write();
            if state.search == text {
                return Ok(());
            }
            state.search = text;
        }

        let state = Arc::downgrade(&self.state);
        let columns = Arc::clone(&self.columns);
        let server_side = self.config.server_side_filtering;
        let handler = Arc::clone(&self.handler);
        self.debouncer.schedule(move || {
            if let Some(state) = state.upgrade() {
                emit(&state, &columns, server_side, handler.as_ref());
            }
        })
    }

    /// Emits the search immediately, cancelling the pending timer.
    pub fn flush_search(&self) -> TableQuery {
        self.emit_now()
    }

    /// Returns the current search text.
    pub fn search(&self) -> String {
        self.read().search.clone()
    }

    /// Returns `true` while a debounced search is waiting to fire.
    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    /// Handles a click on a column header.
    ///
    /// The active column flips between ascending and descending; another
    /// column becomes active ascending. Emits immediately.
    pub fn toggle_sort(&self, key: &str) -> Result<TableQuery, TableError> {
        let column = self.column(key)?;
        if !column.sortable {
            return Err(ColumnError::NotSortable(key.to_string()).into());
        }

        {
            let mut state = self.write();
            let next = Sort::clicked(state.sort.as_ref(), key);
            log::debug!("[table] sort {} {}", next.field, next.direction.as_str());
            state.sort = Some(next);
        }
        Ok(self.emit_now())
    }

    /// Returns the active sort.
    pub fn sort(&self) -> Option<Sort> {
        self.read().sort.clone()
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Sets a column filter and emits immediately.
    ///
    /// `"all"` or an empty value removes the filter.
    pub fn set_filter(&self, key: &str, value: &str) -> Result<TableQuery, TableError> {
        let column = self.column(key)?;
        if !column.is_filterable() {
            return Err(ColumnError::NotFilterable(key.to_string()).into());
        }

        self.write().filters.set(key, value);
        Ok(self.emit_now())
    }

    /// Removes every filter. Emits and returns the query if any filter was
    /// active.
    pub fn clear_filters(&self) -> Option<TableQuery> {
        if !self.write().filters.clear() {
            return None;
        }
        Some(self.emit_now())
    }

    /// Returns the active filters.
    pub fn filters(&self) -> FilterMap {
        self.read().filters.clone()
    }

    /// Number of active filters, for the filter button badge.
    pub fn active_filter_count(&self) -> usize {
        self.read().filters.len()
    }

    /// Whether "Clear All Filters" should be offered.
    pub fn can_clear_filters(&self) -> bool {
        !self.read().filters.is_empty()
    }

    /// Opens the filter dialog.
    pub fn open_filter_dialog(&self) {
        self.write().filter_dialog_open = true;
    }

    /// Closes the filter dialog.
    pub fn close_filter_dialog(&self) {
        self.write().filter_dialog_open = false;
    }

    /// Returns `true` while the filter dialog is open.
    pub fn is_filter_dialog_open(&self) -> bool {
        self.read().filter_dialog_open
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    fn ensure_selection(&self) -> Result<(), SelectionError> {
        if self.config.row_selection {
            Ok(())
        } else {
            Err(SelectionError::Disabled)
        }
    }

    /// Handles the header checkbox: selects every displayed row, or clears
    /// the selection.
    pub fn select_all(&self, checked: bool) -> Result<CheckState, TableError> {
        self.ensure_selection()?;
        let server_side = self.config.server_side_filtering;

        let mut state = self.write();
        let ids: Vec<String> = state
            .displayed(&self.columns, server_side)
            .into_iter()
            .map(|r| r.id().to_string())
            .collect();
        let total = ids.len();
        state.selection.set_all(checked, ids);
        Ok(state.selection.check_state(total))
    }

    /// Toggles one displayed row. Returns `true` if it is now selected.
    pub fn toggle_row(&self, id: &str) -> Result<bool, TableError> {
        self.ensure_selection()?;
        let server_side = self.config.server_side_filtering;

        let mut state = self.write();
        let displayed = state
            .displayed(&self.columns, server_side)
            .iter()
            .any(|r| r.id() == id);
        if !displayed {
            return Err(SelectionError::UnknownRow(id.to_string()).into());
        }
        Ok(state.selection.toggle(id.to_string()))
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.read().selection.is_selected(&id.to_string())
    }

    /// Selected ids in display order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.read()
            .selected_in_order(&self.columns, self.config.server_side_filtering)
    }

    /// State of the header checkbox.
    pub fn check_state(&self) -> CheckState {
        let state = self.read();
        let total = state
            .displayed(&self.columns, self.config.server_side_filtering)
            .len();
        state.selection.check_state(total)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page position.
    ///
    /// With internal pagination the total is the number of rows left after
    /// search and filters.
    pub fn pagination(&self) -> Pagination {
        let state = self.read();
        let matched = state
            .matched(&self.columns, self.config.server_side_filtering)
            .len();
        state.pagination(matched)
    }

    /// Navigates to `page` (1-based).
    ///
    /// Controlled pagination reports the request through
    /// [`on_page_change`](crate::TableHandler::on_page_change) and leaves the
    /// descriptor to the owner.
    pub fn go_to_page(&self, page: usize) -> Result<(), TableError> {
        let pagination = self.pagination();
        if !pagination.contains_page(page) {
            return Err(TableError::PageOutOfRange {
                page,
                page_count: pagination.page_count(),
            });
        }

        let controlled = {
            let mut state = self.write();
            let pages = state.pages;
            match pages {
                PageMode::Controlled(_) => true,
                PageMode::Internal { page_size, .. } => {
                    state.pages = PageMode::Internal {
                        current: page,
                        page_size,
                    };
                    state.reconcile(&self.columns, self.config.server_side_filtering);
                    false
                }
            }
        };
        if controlled {
            self.handler.on_page_change(page, pagination.page_size);
        }
        Ok(())
    }

    /// Navigates to the next page.
    pub fn next_page(&self) -> Result<(), TableError> {
        self.go_to_page(self.pagination().current + 1)
    }

    /// Navigates to the previous page.
    pub fn previous_page(&self) -> Result<(), TableError> {
        self.go_to_page(self.pagination().current.saturating_sub(1))
    }

    /// Changes the page size, always returning to page 1.
    pub fn set_page_size(&self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }

        let controlled = {
            let mut state = self.write();
            let pages = state.pages;
            match pages {
                PageMode::Controlled(_) => true,
                PageMode::Internal { .. } => {
                    state.pages = PageMode::Internal {
                        current: 1,
                        page_size,
                    };
                    state.reconcile(&self.columns, self.config.server_side_filtering);
                    false
                }
            }
        };
        if controlled {
            self.handler.on_page_change(1, page_size);
        }
        Ok(())
    }
}
