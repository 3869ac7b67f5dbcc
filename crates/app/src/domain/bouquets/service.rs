//! Bouquets service.
//!
//! All composition maths goes through [`fleuron::Composition`]; this service
//! persists the outcome and keeps the bouquet product's derived price in
//! step inside the same transaction as every line mutation.

use async_trait::async_trait;
use mockall::automock;

use fleuron::{Composition, CompositionError, Price};

use crate::{
    database::Db,
    domain::{
        bouquets::{
            data::NewBouquetLine,
            errors::BouquetsServiceError,
            models::{BouquetLine, BouquetLineUuid},
            repository::PgBouquetLinesRepository,
        },
        flowers::{PgFlowersRepository, models::FlowerUuid},
        products::{
            PgProductsRepository,
            models::{ProductKind, ProductUuid},
        },
    },
};

/// Rebuild the in-memory composition model from stored lines.
pub(crate) fn composition_from_lines(
    lines: &[BouquetLine],
) -> Result<Composition<FlowerUuid>, CompositionError> {
    Composition::from_lines(
        lines
            .iter()
            .map(|line| (line.flower_uuid, line.quantity, Price::new(line.unit_price))),
    )
}

#[derive(Debug, Clone)]
pub struct PgBouquetsService {
    db: Db,
    lines_repository: PgBouquetLinesRepository,
    products_repository: PgProductsRepository,
    flowers_repository: PgFlowersRepository,
}

impl PgBouquetsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            lines_repository: PgBouquetLinesRepository::new(),
            products_repository: PgProductsRepository::new(),
            flowers_repository: PgFlowersRepository::new(),
        }
    }
}

#[async_trait]
impl BouquetsService for PgBouquetsService {
    async fn list_lines(
        &self,
        bouquet: ProductUuid,
    ) -> Result<Vec<BouquetLine>, BouquetsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.products_repository.get_product(&mut tx, bouquet).await?;

        if product.kind != ProductKind::Bouquet {
            return Err(BouquetsServiceError::NotABouquet);
        }

        let lines = self.lines_repository.list_lines(&mut tx, bouquet).await?;

        tx.commit().await?;

        Ok(lines)
    }

    async fn add_line(
        &self,
        line: NewBouquetLine,
    ) -> Result<BouquetLine, BouquetsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products_repository
            .get_product_for_update(&mut tx, line.bouquet_uuid)
            .await?;

        if product.kind != ProductKind::Bouquet {
            return Err(BouquetsServiceError::NotABouquet);
        }

        let flower = match self
            .flowers_repository
            .get_flower(&mut tx, line.flower_uuid)
            .await
        {
            Ok(flower) => flower,
            Err(sqlx::Error::RowNotFound) => return Err(BouquetsServiceError::FlowerNotFound),
            Err(error) => return Err(error.into()),
        };

        let stored = self
            .lines_repository
            .list_lines(&mut tx, line.bouquet_uuid)
            .await?;

        let mut composition = composition_from_lines(&stored)?;

        // Merge-by-flower happens in the model; the snapshot taken here is
        // the flower's current price, kept only when the line is new.
        composition.add_line(line.flower_uuid, line.quantity, Price::new(flower.price))?;

        let merged = composition
            .lines()
            .iter()
            .find(|candidate| candidate.flower() == line.flower_uuid)
            .copied()
            .ok_or(CompositionError::UnknownFlower)?;

        let persisted = self
            .lines_repository
            .upsert_line(
                &mut tx,
                line.uuid,
                line.bouquet_uuid,
                line.flower_uuid,
                merged.quantity(),
                merged.unit_price().get(),
            )
            .await?;

        let total = composition.total()?;

        self.products_repository
            .set_product_price(&mut tx, line.bouquet_uuid, total.get())
            .await?;

        tx.commit().await?;

        Ok(persisted)
    }

    async fn set_line_quantity(
        &self,
        line: BouquetLineUuid,
        quantity: u32,
    ) -> Result<BouquetLine, BouquetsServiceError> {
        let mut tx = self.db.begin().await?;

        let stored_line = self.lines_repository.get_line(&mut tx, line).await?;

        self.products_repository
            .get_product_for_update(&mut tx, stored_line.bouquet_uuid)
            .await?;

        let stored = self
            .lines_repository
            .list_lines(&mut tx, stored_line.bouquet_uuid)
            .await?;

        let mut composition = composition_from_lines(&stored)?;

        composition.set_quantity(stored_line.flower_uuid, quantity)?;

        let updated = self
            .lines_repository
            .set_line_quantity(&mut tx, line, quantity)
            .await?;

        let total = composition.total()?;

        self.products_repository
            .set_product_price(&mut tx, stored_line.bouquet_uuid, total.get())
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_line(&self, line: BouquetLineUuid) -> Result<(), BouquetsServiceError> {
        let mut tx = self.db.begin().await?;

        let stored_line = self.lines_repository.get_line(&mut tx, line).await?;

        self.products_repository
            .get_product_for_update(&mut tx, stored_line.bouquet_uuid)
            .await?;

        let stored = self
            .lines_repository
            .list_lines(&mut tx, stored_line.bouquet_uuid)
            .await?;

        let mut composition = composition_from_lines(&stored)?;

        if composition.len() == 1 {
            return Err(BouquetsServiceError::EmptyBouquet);
        }

        composition.remove_line(stored_line.flower_uuid)?;

        let rows_affected = self.lines_repository.delete_line(&mut tx, line).await?;

        if rows_affected == 0 {
            return Err(BouquetsServiceError::NotFound);
        }

        let total = composition.total()?;

        self.products_repository
            .set_product_price(&mut tx, stored_line.bouquet_uuid, total.get())
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BouquetsService: Send + Sync {
    /// Retrieves the composition lines of a bouquet product.
    async fn list_lines(
        &self,
        bouquet: ProductUuid,
    ) -> Result<Vec<BouquetLine>, BouquetsServiceError>;

    /// Adds a flower line, merging with an existing line for the same
    /// flower, and re-derives the bouquet price.
    async fn add_line(&self, line: NewBouquetLine)
    -> Result<BouquetLine, BouquetsServiceError>;

    /// Replaces a line's quantity and re-derives the bouquet price.
    async fn set_line_quantity(
        &self,
        line: BouquetLineUuid,
        quantity: u32,
    ) -> Result<BouquetLine, BouquetsServiceError>;

    /// Removes a line (never the last one) and re-derives the bouquet price.
    async fn remove_line(&self, line: BouquetLineUuid) -> Result<(), BouquetsServiceError>;
}
