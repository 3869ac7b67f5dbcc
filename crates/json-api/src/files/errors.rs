//! Stored File Errors

use salvo::http::StatusError;
use tracing::error;

use fleuron_app::domain::files::FilesServiceError;

pub(crate) fn into_status_error(error: FilesServiceError) -> StatusError {
    match error {
        FilesServiceError::AlreadyExists => StatusError::conflict().brief("File already exists"),
        FilesServiceError::NotFound => StatusError::not_found(),
        FilesServiceError::MissingRequiredData | FilesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid file payload")
        }
        FilesServiceError::Sql(source) => {
            error!("files storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
