use std::path::PathBuf;

use datagrid_lib::error::ListError;
use datagrid_lib::error::TableError;
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table definition {path}: {source}")]
    Definition {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode query: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid list response: {0}")]
    List(#[from] ListError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("invalid filter '{0}', expected key=value")]
    InvalidFilter(String),

    #[error("--format url needs {0}")]
    MissingUrlPart(&'static str),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
