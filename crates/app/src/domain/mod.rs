//! Domain services and their store adapters.

pub mod category;
pub mod orders;
pub mod payment_links;
pub mod products;
pub mod subcategories;

pub use category::Category;
