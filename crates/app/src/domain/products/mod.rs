//! Products

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use repository::{MockProductStore, ProductStore};
pub use service::*;
