//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        data::{CategoryUpdate, NewCategory, NewSubcategory, SubcategoryUpdate},
        errors::CategoriesServiceError,
        models::{Category, CategoryUuid, Subcategory, SubcategoryUuid},
        repositories::{PgCategoriesRepository, PgSubcategoriesRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    categories_repository: PgCategoriesRepository,
    subcategories_repository: PgSubcategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories_repository: PgCategoriesRepository::new(),
            subcategories_repository: PgSubcategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.categories_repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self
            .categories_repository
            .get_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .categories_repository
            .create_category(&mut tx, category.uuid, &category.name)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .categories_repository
            .update_category(&mut tx, category, &update.name)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .categories_repository
            .delete_category(&mut tx, category)
            .await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_subcategories(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Subcategory>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        // Listing for a missing category is a 404, not an empty list.
        self.categories_repository
            .get_category(&mut tx, category)
            .await?;

        let subcategories = self
            .subcategories_repository
            .list_subcategories(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(subcategories)
    }

    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<Subcategory, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let subcategory = self
            .subcategories_repository
            .get_subcategory(&mut tx, subcategory)
            .await?;

        tx.commit().await?;

        Ok(subcategory)
    }

    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<Subcategory, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .subcategories_repository
            .create_subcategory(
                &mut tx,
                subcategory.uuid,
                subcategory.category_uuid,
                &subcategory.name,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_subcategory(
        &self,
        subcategory: SubcategoryUuid,
        update: SubcategoryUpdate,
    ) -> Result<Subcategory, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .subcategories_repository
            .update_subcategory(&mut tx, subcategory, &update.name)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .subcategories_repository
            .delete_subcategory(&mut tx, subcategory)
            .await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryUuid)
    -> Result<Category, CategoriesServiceError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError>;

    /// Updates a category.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, CategoriesServiceError>;

    /// Deletes a category along with its subcategories.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;

    /// Retrieves the subcategories of a category.
    async fn list_subcategories(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Subcategory>, CategoriesServiceError>;

    /// Retrieve a single subcategory.
    async fn get_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<Subcategory, CategoriesServiceError>;

    /// Creates a new subcategory under an existing category.
    async fn create_subcategory(
        &self,
        subcategory: NewSubcategory,
    ) -> Result<Subcategory, CategoriesServiceError>;

    /// Updates a subcategory.
    async fn update_subcategory(
        &self,
        subcategory: SubcategoryUuid,
        update: SubcategoryUpdate,
    ) -> Result<Subcategory, CategoriesServiceError>;

    /// Deletes a subcategory.
    async fn delete_subcategory(
        &self,
        subcategory: SubcategoryUuid,
    ) -> Result<(), CategoriesServiceError>;
}
