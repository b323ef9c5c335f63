//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update_payment_status;
pub(crate) mod update_status;

#[cfg(test)]
pub(crate) mod test_support;
