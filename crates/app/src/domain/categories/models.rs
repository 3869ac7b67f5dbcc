//! Category Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Top-level catalog grouping.
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Subcategory UUID
pub type SubcategoryUuid = TypedUuid<Subcategory>;

/// Second-level catalog grouping; belongs to exactly one category and is
/// the parent of products.
#[derive(Debug, Clone)]
pub struct Subcategory {
    pub uuid: SubcategoryUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
