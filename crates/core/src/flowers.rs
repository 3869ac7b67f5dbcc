//! Flowers

use slotmap::{SlotMap, new_key_type};

use crate::prices::Price;

new_key_type! {
    /// Flower Key
    pub struct FlowerKey;
}

/// An in-memory flower catalog keyed by [`FlowerKey`].
pub type FlowerCatalog = SlotMap<FlowerKey, Flower>;

/// An atomic priced ingredient usable in one or more bouquets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flower {
    /// Flower name
    pub name: String,

    /// Flower price in minor units
    pub price: Price,
}

impl Flower {
    /// Creates a new flower with the given name and price.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
