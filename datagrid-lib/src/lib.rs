//! Headless data table engine
//!
//! Search, sort, column filters, row selection, pagination and CSV export
//! for list pages backed by a REST API. The engine keeps the table's UI
//! state, derives the query object list endpoints understand, and either
//! lets its owner re-fetch (server-side filtering) or evaluates the query
//! over the rows it holds (client-side filtering).

pub mod action;
pub mod column;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod list;
pub mod model;
pub mod pagination;
pub mod query;
pub mod selection;

mod engine;
mod handler;

pub use column::Column;
pub use config::TableConfig;
pub use engine::*;
pub use handler::NoopHandler;
pub use handler::TableHandler;
