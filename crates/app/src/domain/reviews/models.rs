//! Review Models

use jiff::Timestamp;

use crate::{
    domain::{products::models::ProductUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<Review>;

/// A customer review of a product. The product's aggregate rating is the
/// average over its reviews.
#[derive(Debug, Clone)]
pub struct Review {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub user_uuid: UserUuid,

    /// 1 to 5 stars.
    pub rating: u8,

    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
