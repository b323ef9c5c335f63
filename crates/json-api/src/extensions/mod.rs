//! Extension traits

mod depot;
mod patch;

pub(crate) use depot::DepotExt as _;
pub(crate) use patch::double_option;
