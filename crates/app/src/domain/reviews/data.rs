//! Review Data

use crate::domain::{
    products::models::ProductUuid,
    reviews::models::ReviewUuid,
    users::models::UserUuid,
};

/// New Review Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub user_uuid: UserUuid,
    pub rating: u8,
    pub body: String,
}

/// Review Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub body: String,
}
