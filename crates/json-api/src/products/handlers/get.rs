//! Get Product Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::products::models::Product;

use crate::{extensions::DepotExt as _, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Price in pence/cents; derived from the composition for bouquets
    pub price: u64,

    /// Product kind, `normal` or `bouquet`
    pub kind: String,

    /// The parent subcategory
    pub subcategory_uuid: Uuid,

    /// Average review rating
    pub rating: f32,

    /// Number of units sold
    pub purchases_count: u64,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated; echo this back as
    /// `expected_updated_at` for conflict-checked updates
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            kind: product.kind.to_string(),
            subcategory_uuid: product.subcategory_uuid.into(),
            rating: product.rating,
            purchases_count: product.purchases_count,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron_app::domain::{
        categories::models::SubcategoryUuid,
        products::{
            MockProductsService, ProductsServiceError,
            models::{ProductKind, ProductUuid},
        },
    };

    use crate::test_helpers::{app_context_with_products, public_service};

    use super::*;

    fn make_product(uuid: ProductUuid) -> Product {
        Product {
            uuid,
            name: "Spring Mix".to_string(),
            description: String::new(),
            price: 350,
            kind: ProductKind::Bouquet,
            subcategory_uuid: SubcategoryUuid::new(),
            rating: 0.0,
            purchases_count: 0,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(products: MockProductsService) -> Service {
        public_service(
            app_context_with_products(products),
            Router::with_path("products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_the_product() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |p| *p == uuid)
            .return_once(move |_| Ok(product));

        let response: ProductResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.kind, "bouquet");
        assert_eq!(response.price, 350);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/123")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
