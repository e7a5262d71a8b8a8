//! Query state and the emitted query object.
//!
//! # Types
//!
//! - [`FilterMap`] - active column filters (`key -> value`)
//! - [`Direction`] / [`Sort`] - sort state and its toggle rules
//! - [`TableQuery`] - the normalized query handed to `on_search`
//!
//! [`local`] evaluates the same state in memory for client-side tables.

mod filter;
pub mod local;
mod order;
mod table_query;

pub use filter::FilterMap;
pub use order::Direction;
pub use order::Sort;
pub use table_query::TableQuery;

/// Filter value meaning "no filter on this column".
pub const ALL_FILTER_VALUE: &str = "all";

/// Query object fields that column keys may not shadow.
pub const RESERVED_QUERY_KEYS: &[&str] = &["search", "sortBy", "sortOrder", "page", "limit"];
