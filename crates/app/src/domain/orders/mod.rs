//! Orders

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
mod repository;
pub mod service;

pub use errors::OrdersServiceError;
pub use repository::{MockOrderStore, OrderStore};
pub use service::*;
