//! Shared fixtures for subcategory handler tests.

use jiff::Timestamp;

use storefront_app::domain::{
    Category,
    subcategories::models::{Subcategory, SubcategoryUuid},
};

pub(crate) fn make_subcategory(name: &str, category: Category) -> Subcategory {
    Subcategory {
        uuid: SubcategoryUuid::new(),
        name: name.to_string(),
        category,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
