//! Fixtures shared by product handler tests.

use jiff::Timestamp;
use rust_decimal::Decimal;

use storefront_app::domain::{
    Category,
    products::models::{Product, ProductUuid},
};

pub(crate) fn make_product(name: &str) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        description: None,
        price: Decimal::from(25),
        category: Category::Natural,
        subcategory: None,
        stock: 3,
        featured: false,
        images: Vec::new(),
        stripe_product_id: None,
        stripe_price_id: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
