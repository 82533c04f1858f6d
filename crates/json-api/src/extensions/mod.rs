//! Extension traits

mod depot;
mod result;
mod tenant;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use tenant::TenantDepotExt as _;
