//! Payment processor integration.

pub mod stripe;

pub use stripe::{
    PaymentGatewayError, PaymentIntent, StripeConfig, StripeGateway, StripeProductRefs,
};
