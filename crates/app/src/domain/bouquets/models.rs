//! Bouquet Line Models

use jiff::Timestamp;

use crate::{
    domain::{flowers::models::FlowerUuid, products::models::ProductUuid},
    uuids::TypedUuid,
};

/// Bouquet Line UUID
pub type BouquetLineUuid = TypedUuid<BouquetLine>;

/// One flower line of a bouquet product.
#[derive(Debug, Clone)]
pub struct BouquetLine {
    pub uuid: BouquetLineUuid,
    pub bouquet_uuid: ProductUuid,
    pub flower_uuid: FlowerUuid,
    pub quantity: u32,

    /// The flower's price when this line was first added; immune to later
    /// flower price edits.
    pub unit_price: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
