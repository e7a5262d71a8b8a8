//! Top-level table engine error

use super::ActionError;
use super::ColumnError;
use super::ExportError;
use super::ListError;
use super::RecordError;
use super::SelectionError;

/// Errors returned by [`TableEngine`](crate::TableEngine) operations.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Column definition or lookup error.
    #[error(transparent)]
    Column(#[from] ColumnError),

    /// Record or data set error.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Row selection error.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Row or bulk action error.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Export error.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// List request/response error.
    #[error(transparent)]
    List(#[from] ListError),

    /// Requested page is outside `1..=page_count`.
    #[error("Page {page} is out of range (1..={page_count})")]
    PageOutOfRange {
        /// Requested page.
        page: usize,
        /// Current page count.
        page_count: usize,
    },

    /// Page size must be at least one.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// A timer was requested outside a Tokio runtime.
    #[error("No Tokio runtime available to schedule the search debounce")]
    NoRuntime,
}

impl TableError {
    /// Returns `true` if the error came from a handler callback rather than
    /// from invalid input.
    pub fn is_handler_failure(&self) -> bool {
        matches!(self, Self::Action(ActionError::Failed { .. }))
    }
}
