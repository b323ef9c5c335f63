//! Storefront domain, persistence, auth, and payment modules.

pub mod auth;
pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod payments;
pub mod store;


mod uuids;

pub use uuids::TypedUuid;
