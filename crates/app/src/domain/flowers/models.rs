//! Flower Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Flower UUID
pub type FlowerUuid = TypedUuid<Flower>;

/// An atomic priced ingredient referenced by bouquet lines.
#[derive(Debug, Clone)]
pub struct Flower {
    pub uuid: FlowerUuid,
    pub name: String,

    /// Current price in minor units. Bouquet lines snapshot this value when
    /// they are added and are not affected by later changes.
    pub price: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
