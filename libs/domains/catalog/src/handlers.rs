use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestQueryResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use database::Pagination;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dto::ProductToReturnDto;
use crate::error::CatalogResult;
use crate::models::{ProductBrand, ProductType};
use crate::params::ProductSpecParams;
use crate::service::CatalogService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_products, get_product, get_product_brands, get_product_types),
    components(
        schemas(ProductToReturnDto, ProductBrand, ProductType),
        responses(
            NotFoundResponse,
            BadRequestQueryResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router; mount it under `/products`.
pub fn router(service: CatalogService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_products))
        .route("/brands", get(get_product_brands))
        .route("/types", get(get_product_types))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// List products with filtering, sorting and paging
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductSpecParams),
    responses(
        (status = 200, description = "One page of products", body = Pagination<ProductToReturnDto>),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products(
    State(service): State<Arc<CatalogService>>,
    ValidatedQuery(params): ValidatedQuery<ProductSpecParams>,
) -> CatalogResult<Json<Pagination<ProductToReturnDto>>> {
    let page = service.get_products(&params).await?;
    Ok(Json(page))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductToReturnDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product(
    State(service): State<Arc<CatalogService>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ProductToReturnDto>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// List every product brand
#[utoipa::path(
    get,
    path = "/brands",
    tag = TAG,
    responses(
        (status = 200, description = "All brands", body = Vec<ProductBrand>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_brands(
    State(service): State<Arc<CatalogService>>,
) -> CatalogResult<Json<Vec<ProductBrand>>> {
    Ok(Json(service.get_brands().await?))
}

/// List every product type
#[utoipa::path(
    get,
    path = "/types",
    tag = TAG,
    responses(
        (status = 200, description = "All types", body = Vec<ProductType>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_types(
    State(service): State<Arc<CatalogService>>,
) -> CatalogResult<Json<Vec<ProductType>>> {
    Ok(Json(service.get_types().await?))
}
