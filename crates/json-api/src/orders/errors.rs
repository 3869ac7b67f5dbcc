//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use fleuron_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Order already exists")
        }
        OrdersServiceError::Conflict => {
            StatusError::conflict().brief("Order was modified concurrently")
        }
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::TransitionRefused(refusal) => {
            StatusError::unprocessable_entity().brief(refusal.to_string())
        }
        OrdersServiceError::EmptyOrder => {
            StatusError::bad_request().brief("Order has no items")
        }
        OrdersServiceError::ProductNotFound => {
            StatusError::bad_request().brief("Referenced product not found")
        }
        OrdersServiceError::InvalidDeliveryDate => {
            StatusError::bad_request().brief("Delivery date is not a valid calendar date")
        }
        OrdersServiceError::Price(_)
        | OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("orders storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
