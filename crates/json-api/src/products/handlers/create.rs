//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::products::data::{NewProduct, NewProductLine};

use crate::{
    extensions::{DepotExt as _, ResultExt as _},
    products::errors::{into_status_error, parse_kind},
    state::State,
};

/// One flower line of a bouquet composition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineRequest {
    pub flower_uuid: Uuid,
    pub quantity: u32,
}

impl From<LineRequest> for NewProductLine {
    fn from(request: LineRequest) -> Self {
        Self {
            flower_uuid: request.flower_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub uuid: Uuid,
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Required for normal products; ignored for bouquets
    pub price: Option<u64>,

    /// `normal` or `bouquet`
    pub kind: String,

    pub subcategory_uuid: Option<Uuid>,

    /// Initial bouquet composition; required non-empty for bouquets
    #[serde(default)]
    pub lines: Vec<LineRequest>,
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product UUID
    pub uuid: Uuid,

    /// The stored price, derived from the composition for bouquets
    pub price: u64,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let new_product = NewProduct {
        uuid: request.uuid.into(),
        name: request.name,
        description: request.description,
        price: request.price,
        kind: parse_kind(&request.kind)?,
        subcategory_uuid: request.subcategory_uuid.map(Into::into),
        lines: request.lines.into_iter().map(Into::into).collect(),
    };

    let created = state
        .app
        .products
        .create_product(new_product)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        uuid: created.uuid.into(),
        price: created.price,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleuron_app::domain::{
        categories::models::SubcategoryUuid,
        flowers::models::FlowerUuid,
        products::{
            MockProductsService, ProductsServiceError,
            models::{Product, ProductKind, ProductUuid},
        },
    };

    use crate::test_helpers::{app_context_with_products, authed_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        authed_service(
            app_context_with_products(products),
            Router::with_path("products").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_bouquet_returns_derived_price() -> TestResult {
        let uuid = ProductUuid::new();
        let flower = FlowerUuid::new();
        let subcategory = SubcategoryUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.kind == ProductKind::Bouquet
                    && new.lines.len() == 1
                    && new.subcategory_uuid == Some(subcategory)
            })
            .return_once(move |new| {
                Ok(Product {
                    uuid: new.uuid,
                    name: new.name,
                    description: new.description,
                    price: 750,
                    kind: new.kind,
                    subcategory_uuid: subcategory,
                    rating: 0.0,
                    purchases_count: 0,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "name": "Rose Trio",
                "kind": "bouquet",
                "subcategory_uuid": subcategory.into_uuid(),
                "lines": [{ "flower_uuid": flower.into_uuid(), "quantity": 3 }],
            }))
            .send(&make_service(products))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.price, 750);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_kind_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "uuid": ProductUuid::new().into_uuid(),
                "name": "Mystery",
                "kind": "subscription",
                "subcategory_uuid": SubcategoryUuid::new().into_uuid(),
            }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_subcategory_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::MissingSubcategory));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "uuid": ProductUuid::new().into_uuid(),
                "name": "Orphan",
                "kind": "normal",
                "price": 100,
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_bouquet_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::EmptyBouquet));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "uuid": ProductUuid::new().into_uuid(),
                "name": "Empty",
                "kind": "bouquet",
                "subcategory_uuid": SubcategoryUuid::new().into_uuid(),
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
