//! Flower Errors

use salvo::http::StatusError;
use tracing::error;

use fleuron_app::domain::flowers::FlowersServiceError;

pub(crate) fn into_status_error(error: FlowersServiceError) -> StatusError {
    match error {
        FlowersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Flower already exists")
        }
        FlowersServiceError::StillReferenced => {
            StatusError::conflict().brief("Flower is still used by a bouquet")
        }
        FlowersServiceError::MissingRequiredData
        | FlowersServiceError::InvalidData
        | FlowersServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid flower payload")
        }
        FlowersServiceError::NotFound => StatusError::not_found(),
        FlowersServiceError::Sql(source) => {
            error!("flowers storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
