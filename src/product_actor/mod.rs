//! Product records: validation, editing and derived rating updates.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
