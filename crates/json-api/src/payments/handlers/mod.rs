//! Payment Handlers

pub(crate) mod charge;
pub(crate) mod confirm;
pub(crate) mod create_link;
pub(crate) mod delete_link;
pub(crate) mod index;
pub(crate) mod webhook;

#[cfg(test)]
pub(crate) mod test_support;
