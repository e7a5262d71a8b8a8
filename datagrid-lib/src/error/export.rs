//! Export errors

/// Errors raised while exporting table contents.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Export is not enabled for this table.
    #[error("Export is disabled for this table")]
    Disabled,

    /// Writing the export failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
}
