//! In-process core of a small art storefront: product and category stores,
//! catalog filtering and pagination, a per-session cart, QR-payment checkout,
//! reviews, custom requests and an admin back office.
//!
//! Every store is a [`ResourceActor`](actor_framework::ResourceActor) behind a
//! cloneable client; [`StorefrontSystem`](app_system::StorefrontSystem) starts
//! and stops them all.

pub mod actor_framework;
pub mod app_system;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod category_actor;
pub mod clients;
pub mod custom_request_actor;
pub mod domain;
pub mod messages;
pub mod payment_actor;
pub mod product_actor;
pub mod review_actor;

#[cfg(test)]
mod mock_framework;
