//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use fleuron_app::domain::products::{ProductsServiceError, models::ProductKind};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::Conflict => {
            StatusError::conflict().brief("Product was modified concurrently")
        }
        ProductsServiceError::NotFound => StatusError::not_found(),
        ProductsServiceError::MissingSubcategory => {
            StatusError::bad_request().brief("Product requires a subcategory")
        }
        ProductsServiceError::MissingPrice => {
            StatusError::bad_request().brief("Normal product requires an explicit price")
        }
        ProductsServiceError::EmptyBouquet => {
            StatusError::bad_request().brief("Bouquet requires at least one flower line")
        }
        ProductsServiceError::LinesOnNormalProduct => {
            StatusError::bad_request().brief("Normal product cannot carry flower lines")
        }
        ProductsServiceError::FlowerNotFound => {
            StatusError::bad_request().brief("Referenced flower not found")
        }
        ProductsServiceError::Composition(_) => {
            StatusError::bad_request().brief("Invalid bouquet composition")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData
        | ProductsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("products storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Parse the wire form of a product kind.
pub(crate) fn parse_kind(kind: &str) -> Result<ProductKind, StatusError> {
    kind.parse::<ProductKind>()
        .map_err(|_source| StatusError::bad_request().brief("Unknown product kind"))
}
