//! Bouquets service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use fleuron::CompositionError;

#[derive(Debug, Error)]
pub enum BouquetsServiceError {
    #[error("bouquet line already exists")]
    AlreadyExists,

    #[error("bouquet or line not found")]
    NotFound,

    #[error("product is not a bouquet")]
    NotABouquet,

    #[error("referenced flower not found")]
    FlowerNotFound,

    /// Removing the final remaining line would leave a bouquet with no
    /// composition.
    #[error("bouquet must keep at least one flower line")]
    EmptyBouquet,

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BouquetsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
