//! Session authentication state and the single role capability every
//! authorization decision goes through.

mod context;
mod policy;

pub use context::*;
pub use policy::*;
