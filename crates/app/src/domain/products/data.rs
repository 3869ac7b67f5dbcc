//! Product Data

use jiff::Timestamp;

use crate::domain::{
    categories::models::SubcategoryUuid,
    flowers::models::FlowerUuid,
    products::models::{ProductKind, ProductUuid},
};

/// One requested flower line when creating a bouquet or replacing its
/// composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewProductLine {
    pub flower_uuid: FlowerUuid,
    pub quantity: u32,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,

    /// Required for normal products; ignored for bouquets, whose price is
    /// derived from `lines`.
    pub price: Option<u64>,

    pub kind: ProductKind,
    pub subcategory_uuid: Option<SubcategoryUuid>,

    /// Initial composition; must be non-empty for bouquets and empty for
    /// normal products.
    pub lines: Vec<NewProductLine>,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,

    /// Required when switching a bouquet to normal; ignored for bouquets.
    pub price: Option<u64>,

    pub kind: ProductKind,
    pub subcategory_uuid: Option<SubcategoryUuid>,

    /// When present, replaces the bouquet composition wholesale.
    pub lines: Option<Vec<NewProductLine>>,

    /// Optimistic-concurrency precondition: the update is refused when the
    /// stored row's `updated_at` no longer matches.
    pub expected_updated_at: Option<Timestamp>,
}
