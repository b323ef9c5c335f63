//! Subcategory Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
pub(crate) mod test_support;
