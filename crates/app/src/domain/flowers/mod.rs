//! Flowers

pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub(crate) use repository::PgFlowersRepository;

pub use errors::FlowersServiceError;
pub use service::*;
