//! Bouquet Line Errors

use salvo::http::StatusError;
use tracing::error;

use fleuron_app::domain::bouquets::BouquetsServiceError;

pub(crate) fn into_status_error(error: BouquetsServiceError) -> StatusError {
    match error {
        BouquetsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Bouquet line already exists")
        }
        BouquetsServiceError::NotFound => StatusError::not_found(),
        BouquetsServiceError::NotABouquet => {
            StatusError::bad_request().brief("Product is not a bouquet")
        }
        BouquetsServiceError::FlowerNotFound => {
            StatusError::bad_request().brief("Referenced flower not found")
        }
        BouquetsServiceError::EmptyBouquet => {
            StatusError::bad_request().brief("Bouquet must keep at least one flower line")
        }
        BouquetsServiceError::Composition(_) => {
            StatusError::bad_request().brief("Invalid composition change")
        }
        BouquetsServiceError::InvalidReference
        | BouquetsServiceError::MissingRequiredData
        | BouquetsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid bouquet line payload")
        }
        BouquetsServiceError::Sql(source) => {
            error!("bouquet lines storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
