//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod update;
