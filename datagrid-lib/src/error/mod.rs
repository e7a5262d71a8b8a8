//! Error types

mod action;
mod column;
mod export;
mod list;
mod record;
mod selection;
mod table;

pub use action::*;
pub use column::*;
pub use export::*;
pub use list::*;
pub use record::*;
pub use selection::*;
pub use table::*;
