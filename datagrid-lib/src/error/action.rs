//! Action errors

/// Errors raised by row actions, bulk actions and the handler callbacks
/// backing them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The handler reported a failure.
    #[error("Action '{action}' failed: {message}")]
    Failed {
        /// Action identifier (`delete`, bulk action value, row action id).
        action: String,
        /// Message reported by the handler.
        message: String,
    },

    /// The bulk action value is not one of the configured bulk actions.
    #[error("Unknown bulk action: {0}")]
    UnknownBulkAction(String),

    /// Another bulk action has not finished yet.
    #[error("Bulk action '{0}' is still in progress")]
    InProgress(String),

    /// The row action does not exist for this row.
    #[error("Unknown row action: {0}")]
    UnknownRowAction(String),

    /// The row action is disabled for this row.
    #[error("Row action '{0}' is disabled for this row")]
    Disabled(String),

    /// The action has no handler wired (e.g. no add button).
    #[error("Action '{0}' is not configured")]
    NotConfigured(&'static str),
}

impl ActionError {
    /// Creates a handler failure for the given action.
    pub fn failed(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            action: action.into(),
            message: message.into(),
        }
    }
}
