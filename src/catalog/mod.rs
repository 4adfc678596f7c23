//! Catalog browsing: filter criteria, the filter engine, pagination helpers
//! and the service actor that keeps them in sync with the stores.

mod criteria;
mod engine;
mod error;
mod pagination;
pub mod service;
mod store;

pub use criteria::*;
pub use engine::*;
pub use error::*;
pub use pagination::*;
pub use store::*;
