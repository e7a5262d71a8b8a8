//! Row data model.
//!
//! - [`Value`] - dynamic field value held by a record
//! - [`Record`] - a row with a required unique string id

mod record;
mod value;

pub use record::Record;
pub use value::Value;
