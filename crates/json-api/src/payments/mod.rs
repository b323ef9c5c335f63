//! Payment routes: shareable links, checkout charges, confirmations and
//! the Stripe webhook.

pub(crate) mod errors;
pub(crate) mod handlers;

pub(crate) use handlers::*;
