//! Flowers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::flowers::{
        data::{FlowerUpdate, NewFlower},
        errors::FlowersServiceError,
        models::{Flower, FlowerUuid},
        repository::PgFlowersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFlowersService {
    db: Db,
    repository: PgFlowersRepository,
}

impl PgFlowersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFlowersRepository::new(),
        }
    }
}

#[async_trait]
impl FlowersService for PgFlowersService {
    async fn list_flowers(&self) -> Result<Vec<Flower>, FlowersServiceError> {
        let mut tx = self.db.begin().await?;

        let flowers = self.repository.list_flowers(&mut tx).await?;

        tx.commit().await?;

        Ok(flowers)
    }

    async fn get_flower(&self, flower: FlowerUuid) -> Result<Flower, FlowersServiceError> {
        let mut tx = self.db.begin().await?;

        let flower = self.repository.get_flower(&mut tx, flower).await?;

        tx.commit().await?;

        Ok(flower)
    }

    async fn create_flower(&self, flower: NewFlower) -> Result<Flower, FlowersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_flower(&mut tx, flower.uuid, &flower.name, flower.price)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_flower(
        &self,
        flower: FlowerUuid,
        update: FlowerUpdate,
    ) -> Result<Flower, FlowersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_flower(&mut tx, flower, &update.name, update.price)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_flower(&self, flower: FlowerUuid) -> Result<(), FlowersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_flower(&mut tx, flower).await?;

        if rows_affected == 0 {
            return Err(FlowersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FlowersService: Send + Sync {
    /// Retrieves all flowers.
    async fn list_flowers(&self) -> Result<Vec<Flower>, FlowersServiceError>;

    /// Retrieve a single flower.
    async fn get_flower(&self, flower: FlowerUuid) -> Result<Flower, FlowersServiceError>;

    /// Creates a new flower.
    async fn create_flower(&self, flower: NewFlower) -> Result<Flower, FlowersServiceError>;

    /// Updates a flower's name and current price. Existing bouquet lines
    /// keep their snapshots.
    async fn update_flower(
        &self,
        flower: FlowerUuid,
        update: FlowerUpdate,
    ) -> Result<Flower, FlowersServiceError>;

    /// Deletes a flower that no bouquet references.
    async fn delete_flower(&self, flower: FlowerUuid) -> Result<(), FlowersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_flower_returns_created_flower() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = FlowerUuid::new();

        let flower = ctx
            .flowers
            .create_flower(NewFlower {
                uuid,
                name: "Red Rose".to_string(),
                price: 250,
            })
            .await?;

        assert_eq!(flower.uuid, uuid);
        assert_eq!(flower.price, 250);

        Ok(())
    }

    #[tokio::test]
    async fn get_flower_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.flowers.get_flower(FlowerUuid::new()).await;

        assert!(
            matches!(result, Err(FlowersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_flower_reflects_new_price() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ctx.create_flower("Tulip", 120).await?;

        let updated = ctx
            .flowers
            .update_flower(
                uuid,
                FlowerUpdate {
                    name: "Tulip".to_string(),
                    price: 140,
                },
            )
            .await?;

        assert_eq!(updated.price, 140);

        Ok(())
    }

    #[tokio::test]
    async fn delete_flower_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.flowers.delete_flower(FlowerUuid::new()).await;

        assert!(
            matches!(result, Err(FlowersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_flower_referenced_by_bouquet_is_refused() -> TestResult {
        let ctx = TestContext::new().await;

        let flower = ctx.create_flower("Rose", 250).await?;
        let subcategory = ctx.create_default_subcategory().await?;

        ctx.create_bouquet(subcategory, &[(flower, 2)]).await?;

        let result = ctx.flowers.delete_flower(flower).await;

        assert!(
            matches!(result, Err(FlowersServiceError::StillReferenced)),
            "expected StillReferenced, got {result:?}"
        );

        Ok(())
    }
}
