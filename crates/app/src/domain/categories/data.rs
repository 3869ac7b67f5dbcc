//! Category Data

use crate::domain::categories::models::{CategoryUuid, SubcategoryUuid};

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
}

/// Category Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub name: String,
}

/// New Subcategory Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubcategory {
    pub uuid: SubcategoryUuid,
    pub category_uuid: CategoryUuid,
    pub name: String,
}

/// Subcategory Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryUpdate {
    pub name: String,
}
