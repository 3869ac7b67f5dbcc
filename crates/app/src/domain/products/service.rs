//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use fleuron::{Composition, Price};

use crate::{
    database::Db,
    domain::{
        bouquets::{PgBouquetLinesRepository, models::BouquetLineUuid},
        flowers::PgFlowersRepository,
        products::{
            data::{NewProduct, NewProductLine, ProductUpdate},
            errors::ProductsServiceError,
            models::{Product, ProductKind, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    lines_repository: PgBouquetLinesRepository,
    flowers_repository: PgFlowersRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            lines_repository: PgBouquetLinesRepository::new(),
            flowers_repository: PgFlowersRepository::new(),
        }
    }

    /// Replace a bouquet's composition wholesale and return the derived
    /// price. Duplicate flowers in the request are merged by the model;
    /// every line snapshots the flower's current price.
    async fn write_bouquet_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        bouquet: ProductUuid,
        lines: &[NewProductLine],
    ) -> Result<u64, ProductsServiceError> {
        if lines.is_empty() {
            return Err(ProductsServiceError::EmptyBouquet);
        }

        let mut composition = Composition::new();

        for line in lines {
            let flower = match self.flowers_repository.get_flower(tx, line.flower_uuid).await {
                Ok(flower) => flower,
                Err(sqlx::Error::RowNotFound) => {
                    return Err(ProductsServiceError::FlowerNotFound);
                }
                Err(error) => return Err(error.into()),
            };

            composition.add_line(line.flower_uuid, line.quantity, Price::new(flower.price))?;
        }

        self.lines_repository
            .delete_lines_for_bouquet(tx, bouquet)
            .await?;

        for line in composition.lines() {
            self.lines_repository
                .insert_line(
                    tx,
                    BouquetLineUuid::new(),
                    bouquet,
                    line.flower(),
                    line.quantity(),
                    line.unit_price().get(),
                )
                .await?;
        }

        Ok(composition.total()?.get())
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let subcategory = product
            .subcategory_uuid
            .ok_or(ProductsServiceError::MissingSubcategory)?;

        let mut tx = self.db.begin().await?;

        let created = match product.kind {
            ProductKind::Normal => {
                if !product.lines.is_empty() {
                    return Err(ProductsServiceError::LinesOnNormalProduct);
                }

                let price = product.price.ok_or(ProductsServiceError::MissingPrice)?;

                self.repository
                    .create_product(
                        &mut tx,
                        product.uuid,
                        &product.name,
                        &product.description,
                        price,
                        ProductKind::Normal,
                        subcategory,
                    )
                    .await?
            }
            ProductKind::Bouquet => {
                if product.lines.is_empty() {
                    return Err(ProductsServiceError::EmptyBouquet);
                }

                // The price column is derived for bouquets; insert with a
                // placeholder, then write the composed total.
                self.repository
                    .create_product(
                        &mut tx,
                        product.uuid,
                        &product.name,
                        &product.description,
                        0,
                        ProductKind::Bouquet,
                        subcategory,
                    )
                    .await?;

                let derived = self
                    .write_bouquet_lines(&mut tx, product.uuid, &product.lines)
                    .await?;

                self.repository
                    .set_product_price(&mut tx, product.uuid, derived)
                    .await?;

                self.repository.get_product(&mut tx, product.uuid).await?
            }
        };

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let subcategory = update
            .subcategory_uuid
            .ok_or(ProductsServiceError::MissingSubcategory)?;

        let mut tx = self.db.begin().await?;

        let current = self.repository.get_product_for_update(&mut tx, product).await?;

        if let Some(expected) = update.expected_updated_at
            && expected != current.updated_at
        {
            return Err(ProductsServiceError::Conflict);
        }

        let updated = match update.kind {
            ProductKind::Normal => {
                if update.lines.as_ref().is_some_and(|lines| !lines.is_empty()) {
                    return Err(ProductsServiceError::LinesOnNormalProduct);
                }

                // Leaving bouquet land drops the composition and requires an
                // authored price again.
                let price = match current.kind {
                    ProductKind::Bouquet => {
                        update.price.ok_or(ProductsServiceError::MissingPrice)?
                    }
                    ProductKind::Normal => update.price.unwrap_or(current.price),
                };

                if current.kind == ProductKind::Bouquet {
                    self.lines_repository
                        .delete_lines_for_bouquet(&mut tx, product)
                        .await?;
                }

                self.repository
                    .update_product(
                        &mut tx,
                        product,
                        &update.name,
                        &update.description,
                        price,
                        ProductKind::Normal,
                        subcategory,
                    )
                    .await?
            }
            ProductKind::Bouquet => {
                let derived = match update.lines {
                    Some(ref lines) => {
                        self.write_bouquet_lines(&mut tx, product, lines).await?
                    }
                    None => {
                        if current.kind == ProductKind::Normal {
                            // Becoming a bouquet needs an initial composition.
                            return Err(ProductsServiceError::EmptyBouquet);
                        }

                        current.price
                    }
                };

                self.repository
                    .update_product(
                        &mut tx,
                        product,
                        &update.name,
                        &update.description,
                        derived,
                        ProductKind::Bouquet,
                        subcategory,
                    )
                    .await?
            }
        };

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product. Bouquets must carry an initial composition
    /// and their price is derived from it; normal products require an
    /// authored price.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Updates a product, including kind transitions: bouquet → normal
    /// drops the composition and requires an explicit price; normal →
    /// bouquet requires an initial composition and derives the price.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
