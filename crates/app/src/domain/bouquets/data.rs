//! Bouquet Line Data

use crate::domain::{
    bouquets::models::BouquetLineUuid, flowers::models::FlowerUuid,
    products::models::ProductUuid,
};

/// New Bouquet Line Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBouquetLine {
    pub uuid: BouquetLineUuid,
    pub bouquet_uuid: ProductUuid,
    pub flower_uuid: FlowerUuid,
    pub quantity: u32,
}
