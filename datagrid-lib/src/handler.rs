//! Callbacks the table raises towards its owner.

use async_trait::async_trait;

use crate::error::ActionError;
use crate::model::Record;
use crate::query::TableQuery;

/// Receives queries and user actions from a [`TableEngine`](crate::TableEngine).
///
/// Every method has a no-op default, so implementors only override what the
/// page wires up. Synchronous methods are fire-and-forget notifications; the
/// two async methods are awaited so the engine can keep or roll back its
/// state depending on the outcome.
///
/// Handlers are called without any engine lock held, so they may call back
/// into the engine.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use datagrid_lib::TableHandler;
/// use datagrid_lib::error::ActionError;
/// use datagrid_lib::query::TableQuery;
///
/// struct UsersPage;
///
/// #[async_trait]
/// impl TableHandler for UsersPage {
///     fn on_search(&self, query: &TableQuery) {
///         println!("GET /api/v1/masterdata/users/?{}", query.to_query_string());
///     }
///
///     async fn on_bulk_action(&self, action: &str, ids: &[String]) -> Result<(), ActionError> {
///         if action == "delete" && ids.len() > 100 {
///             return Err(ActionError::failed(action, "too many rows"));
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait TableHandler: Send + Sync {
    /// Search, sort or filter state changed.
    fn on_search(&self, _query: &TableQuery) {}

    /// The add button was pressed.
    fn on_add(&self) {}

    /// Edit was chosen for a row.
    fn on_edit(&self, _record: &Record) {}

    /// Delete was chosen for a row.
    async fn on_delete(&self, _record: &Record) -> Result<(), ActionError> {
        Ok(())
    }

    /// A bulk action was run over the selected ids.
    async fn on_bulk_action(&self, _action: &str, _ids: &[String]) -> Result<(), ActionError> {
        Ok(())
    }

    /// A custom row action was chosen.
    fn on_row_action(&self, _action: &str, _record: &Record) {}

    /// The page or page size changed (controlled pagination only).
    fn on_page_change(&self, _page: usize, _page_size: usize) {}
}

/// Handler that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl TableHandler for NoopHandler {}
