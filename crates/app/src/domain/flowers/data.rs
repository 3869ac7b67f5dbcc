//! Flower Data

use crate::domain::flowers::models::FlowerUuid;

/// New Flower Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlower {
    pub uuid: FlowerUuid,
    pub name: String,
    pub price: u64,
}

/// Flower Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerUpdate {
    pub name: String,
    pub price: u64,
}
