//! Subcategories

pub(crate) mod handlers;

pub(crate) use handlers::*;
