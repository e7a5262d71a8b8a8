//! Selection errors

/// Errors raised by row-selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Row selection is turned off for this table.
    #[error("Row selection is disabled for this table")]
    Disabled,

    /// No row with this id is in the current data.
    #[error("Unknown row: {0}")]
    UnknownRow(String),

    /// A bulk action was requested with nothing selected.
    #[error("No rows selected")]
    Empty,
}
