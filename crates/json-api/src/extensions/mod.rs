//! Extension traits

mod depot;
mod pagination;
mod result;
mod timestamps;

pub(crate) use depot::{CurrentUserExt, DepotExt};
pub(crate) use pagination::PageParams;
pub(crate) use result::ResultExt;
pub(crate) use timestamps::TimestampParamExt;
