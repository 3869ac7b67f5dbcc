//! Products

pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub(crate) use repository::PgProductsRepository;

pub use errors::ProductsServiceError;
pub use service::*;
