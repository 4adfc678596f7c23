//! Storefront records, free of any actor or channel concerns.

pub mod category;
pub mod custom_request;
pub mod dashboard;
pub mod payment;
pub mod product;
pub mod review;
pub mod user;

pub use category::*;
pub use custom_request::*;
pub use dashboard::*;
pub use payment::*;
pub use product::*;
pub use review::*;
pub use user::*;
