//! Payment Links

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
mod repository;
pub mod service;

pub use errors::PaymentLinksServiceError;
pub use repository::{MockPaymentLinkStore, PaymentLinkStore};
pub use service::*;
