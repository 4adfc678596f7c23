//! Per-session shopping cart.

mod session;

pub use session::*;
