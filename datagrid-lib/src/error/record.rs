//! Record errors

/// Errors raised while building or loading row records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The JSON value for a record was not an object.
    #[error("Record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The record has no `id` field.
    #[error("Record is missing the required 'id' field")]
    MissingId,

    /// The `id` field is present but is not a string or number.
    #[error("Record id must be a string or number, got {0}")]
    InvalidId(&'static str),

    /// Two records in the same data set share an id.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}
