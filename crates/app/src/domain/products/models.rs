//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{Category, subcategories::models::SubcategoryUuid},
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Maximum number of image references a product may carry.
pub const MAX_IMAGES: usize = 5;

/// Reference to a subcategory, carrying a cached display name.
///
/// The uuid is the durable link; the name is a denormalized copy taken when
/// the reference was set and may lag behind a later rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryRef {
    pub uuid: SubcategoryUuid,
    pub name: String,
}

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Category,
    pub subcategory: Option<SubcategoryRef>,
    pub stock: u32,
    pub featured: bool,
    /// Up to [`MAX_IMAGES`] entries, each a URL or an inline `data:` blob.
    pub images: Vec<String>,
    /// Set asynchronously by the processor mirror task.
    pub stripe_product_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
///
/// Service-level input; optional fields take catalog defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Category,
    pub subcategory: Option<SubcategoryUuid>,
    pub stock: Option<u32>,
    pub images: Option<Vec<String>>,
}

/// Validated row handed to a store for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Category,
    pub subcategory: Option<SubcategoryRef>,
    pub stock: u32,
    pub featured: bool,
    pub images: Vec<String>,
}

/// Product Update Model
///
/// Merge semantics: `None` preserves the stored value. The doubly-optional
/// fields distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub category: Option<Category>,
    pub subcategory: Option<Option<SubcategoryUuid>>,
    pub stock: Option<u32>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
}

/// Store-level merge payload with subcategory references resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub category: Option<Category>,
    pub subcategory: Option<Option<SubcategoryRef>>,
    pub stock: Option<u32>,
    pub featured: Option<bool>,
    pub images: Option<Vec<String>>,
}
