//! Product Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::categories::models::SubcategoryUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Whether a product is an atomic item or a bouquet composed of flowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// A plain product with an authored price.
    Normal,

    /// A composite product whose price is derived from its flower lines.
    Bouquet,
}

/// The product kind could not be parsed from its wire form.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product kind {0:?}")]
pub struct ParseProductKindError(pub String);

impl ProductKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bouquet => "bouquet",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = ParseProductKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "normal" => Ok(Self::Normal),
            "bouquet" => Ok(Self::Bouquet),
            other => Err(ParseProductKindError(other.to_owned())),
        }
    }
}

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,

    /// Price in minor units. Authored for normal products, derived from the
    /// composition for bouquets.
    pub price: u64,

    pub kind: ProductKind,
    pub subcategory_uuid: SubcategoryUuid,

    /// Average review rating, 0 when unreviewed.
    pub rating: f32,

    pub purchases_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
