//! The table engine.
//!
//! [`TableEngine`] owns the UI state of one data table (search text, sort,
//! column filters, row selection, page position) over rows supplied by its
//! owner, and reports changes through a [`TableHandler`].
//!
//! - `events` - user interactions (search, sort, filters, selection, paging)
//! - `actions` - add/edit/delete, custom row actions and bulk actions
//! - `view` - header, body, footer and filter dialog models, CSV export

mod actions;
mod events;
mod state;
mod view;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

pub use view::FilterField;
pub use view::HeaderCell;
pub use view::RowView;
pub use view::TableBody;

use self::state::EngineState;
use self::state::PageMode;
use crate::action::RowAction;
use crate::column::Column;
use crate::column::validate_columns;
use crate::config::TableConfig;
use crate::debounce::Debouncer;
use crate::error::ColumnError;
use crate::error::RecordError;
use crate::error::TableError;
use crate::handler::TableHandler;
use crate::list::ListPage;
use crate::model::Record;
use crate::pagination::Pagination;
use crate::query::TableQuery;

/// Headless data table.
///
/// Holds the presentation state of one table and derives from it:
/// - the [`TableQuery`] handed to [`TableHandler::on_search`] on every
///   search (debounced), sort or filter change,
/// - in client-side mode, the searched, filtered, sorted and paged rows,
/// - view models for the header, body, pagination footer and filter dialog.
///
/// Dropping the engine cancels a pending debounced search.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use datagrid_lib::{Column, NoopHandler, TableConfig, TableEngine};
/// use datagrid_lib::model::Record;
///
/// let engine = TableEngine::new(
///     vec![Column::new("name", "Name").sortable()],
///     TableConfig::default(),
///     Arc::new(NoopHandler),
/// )
/// .unwrap();
///
/// engine.set_records(vec![Record::new("1").set("name", "Ana")]).unwrap();
/// let query = engine.toggle_sort("name").unwrap();
/// assert_eq!(query.page, 1);
/// ```
pub struct TableEngine {
    columns: Arc<[Column]>,
    config: Arc<TableConfig>,
    row_actions: Vec<RowAction>,
    handler: Arc<dyn TableHandler>,
    state: Arc<RwLock<EngineState>>,
    debouncer: Debouncer,
}

impl TableEngine {
    /// Creates an engine over `columns`.
    ///
    /// Fails if column keys repeat or collide with query fields, or if the
    /// configured page size is zero.
    pub fn new(
        columns: Vec<Column>,
        config: TableConfig,
        handler: Arc<dyn TableHandler>,
    ) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        if config.page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }

        let state = EngineState::new(config.row_selection, config.page_size);
        Ok(Self {
            columns: columns.into(),
            debouncer: Debouncer::new(config.debounce),
            config: Arc::new(config),
            row_actions: Vec::new(),
            handler,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Sets the custom row actions.
    pub fn with_row_actions(mut self, actions: Vec<RowAction>) -> Self {
        self.row_actions = actions;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns all column descriptors, hidden ones included.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given key.
    pub fn column(&self, key: &str) -> Result<&Column, ColumnError> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| ColumnError::Unknown(key.to_string()))
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replaces the rows.
    ///
    /// Ids must be unique. Selected ids that are no longer displayed are
    /// dropped from the selection.
    pub fn set_records(&self, records: Vec<Record>) -> Result<(), TableError> {
        check_unique_ids(&records)?;

        let mut state = self.write();
        state.records = records;
        let dropped = state.reconcile(&self.columns, self.config.server_side_filtering);
        if dropped > 0 {
            log::debug!("[table] dropped {} stale selected row(s)", dropped);
        }
        Ok(())
    }

    /// Returns a copy of the rows as supplied.
    pub fn records(&self) -> Vec<Record> {
        self.read().records.clone()
    }

    /// Sets the loading flag shown in place of the body.
    pub fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
    }

    /// Returns the loading flag.
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Hands page position to the owner (controlled pagination).
    pub fn set_pagination(&self, pagination: Pagination) {
        let mut state = self.write();
        state.pages = PageMode::Controlled(pagination);
        state.reconcile(&self.columns, self.config.server_side_filtering);
    }

    /// Applies a list response to the table.
    ///
    /// `sequence` is the [`TableQuery::sequence`] the response answers. A
    /// response to a superseded query is ignored and `Ok(false)` returned.
    /// Otherwise the rows are replaced and pagination becomes controlled by
    /// the response's page info. The current page size is kept when the
    /// response states no limit.
    pub fn accept_page(&self, sequence: u64, page: ListPage) -> Result<bool, TableError> {
        check_unique_ids(&page.rows)?;

        let mut state = self.write();
        if sequence < state.sequence {
            log::debug!(
                "[table] ignoring stale page for query #{} (latest #{})",
                sequence,
                state.sequence
            );
            return Ok(false);
        }
        let pagination = page.pagination(state.page_size());
        state.records = page.rows;
        state.pages = PageMode::Controlled(pagination);
        state.reconcile(&self.columns, self.config.server_side_filtering);
        Ok(true)
    }

    /// Sequence number of the most recently emitted query.
    pub fn latest_sequence(&self) -> u64 {
        self.read().sequence
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, EngineState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EngineState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emits the current query now, superseding a pending debounced search.
    fn emit_now(&self) -> TableQuery {
        if self.debouncer.cancel() {
            log::debug!("[table] pending search folded into immediate query");
        }
        emit(
            &self.state,
            &self.columns,
            self.config.server_side_filtering,
            self.handler.as_ref(),
        )
    }
}

impl std::fmt::Debug for TableEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableEngine")
            .field("columns", &self.columns)
            .field("config", &self.config)
            .field("row_actions", &self.row_actions)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

fn check_unique_ids(records: &[Record]) -> Result<(), RecordError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(RecordError::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}

/// Composes the query, reconciles the view, then calls the handler with no
/// lock held.
fn emit(
    state: &RwLock<EngineState>,
    columns: &[Column],
    server_side: bool,
    handler: &dyn TableHandler,
) -> TableQuery {
    let query = {
        let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
        let query = guard.compose_query();
        guard.reconcile(columns, server_side);
        query
    };
    log::debug!("[table] query #{}: {}", query.sequence, query.to_query_string());
    handler.on_search(&query);
    query
}
