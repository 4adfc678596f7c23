//! Category records.

pub mod entity;
pub mod error;

pub use entity::normalize_name;
pub use error::*;
