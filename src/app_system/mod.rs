//! System orchestration, startup, configuration and shutdown logic.

pub mod config;
pub mod error;
pub mod session;
pub mod storefront_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use session::*;
pub use storefront_system::*;
pub use self::tracing::*;
