//! Column definition errors

/// Errors raised when column descriptors are invalid or referenced wrongly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// Two columns share the same key.
    #[error("Duplicate column key: {0}")]
    DuplicateKey(String),

    /// The key collides with a field of the emitted query object.
    #[error("Column key '{0}' is reserved by the query object")]
    ReservedKey(String),

    /// No column with this key exists.
    #[error("Unknown column: {0}")]
    Unknown(String),

    /// The column exists but is not marked sortable.
    #[error("Column '{0}' is not sortable")]
    NotSortable(String),

    /// The column exists but declares no filter.
    #[error("Column '{0}' is not filterable")]
    NotFilterable(String),
}
