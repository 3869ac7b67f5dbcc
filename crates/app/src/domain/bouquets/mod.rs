//! Bouquet composition lines

pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub(crate) use repository::PgBouquetLinesRepository;

pub use errors::BouquetsServiceError;
pub use service::*;
