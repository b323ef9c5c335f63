//! Subcategories

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;
mod repository;
pub mod service;

pub use errors::SubcategoriesServiceError;
pub use repository::{MockSubcategoryStore, SubcategoryStore};
pub use service::*;
