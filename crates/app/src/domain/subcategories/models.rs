//! Subcategory Models

use jiff::Timestamp;

use crate::{domain::Category, uuids::TypedUuid};

/// Subcategory UUID
pub type SubcategoryUuid = TypedUuid<Subcategory>;

/// A named grouping within one of the two product lines.
///
/// `(name, category)` pairs are unique.
#[derive(Debug, Clone)]
pub struct Subcategory {
    pub uuid: SubcategoryUuid,
    pub name: String,
    pub category: Category,
    pub created_at: Timestamp,
}

/// New Subcategory Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubcategory {
    pub name: String,
    pub category: Category,
}
