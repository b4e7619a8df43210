use database::Pagination;
use validator::Validate;

use crate::dto::{ProductMapper, ProductToReturnDto};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{ProductBrand, ProductType};
use crate::params::ProductSpecParams;
use crate::repository::CatalogRepositories;
use crate::specifications::{
    product_with_types_and_brands, products_with_filters_for_count,
    products_with_types_and_brands,
};

/// Read-only catalog queries
#[derive(Clone, Debug)]
pub struct CatalogService {
    repositories: CatalogRepositories,
    mapper: ProductMapper,
}

impl CatalogService {
    pub fn new(repositories: CatalogRepositories, mapper: ProductMapper) -> Self {
        Self {
            repositories,
            mapper,
        }
    }

    /// One page of products plus the number of products matching the filters.
    ///
    /// The count and the page are read concurrently and are not wrapped in a
    /// transaction.
    pub async fn get_products(
        &self,
        params: &ProductSpecParams,
    ) -> CatalogResult<Pagination<ProductToReturnDto>> {
        params
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let spec = products_with_types_and_brands(params);
        let count_spec = products_with_filters_for_count(params);

        let (count, products) = tokio::try_join!(
            self.repositories.products.count_with_spec(&count_spec),
            self.repositories.products.list_with_spec(&spec),
        )?;

        tracing::debug!(count, returned = products.len(), "Products page assembled");

        Ok(Pagination::new(
            params.page_index,
            params.page_size(),
            count,
            self.mapper.map_all(products),
        ))
    }

    /// A single product with its brand and type names.
    pub async fn get_product(&self, id: i32) -> CatalogResult<ProductToReturnDto> {
        self.repositories
            .products
            .get_entity_with_spec(&product_with_types_and_brands(id))
            .await?
            .map(|product| self.mapper.map(product))
            .ok_or(CatalogError::NotFound(id))
    }

    pub async fn get_brands(&self) -> CatalogResult<Vec<ProductBrand>> {
        Ok(self.repositories.brands.list_all().await?)
    }

    pub async fn get_types(&self) -> CatalogResult<Vec<ProductType>> {
        Ok(self.repositories.types.list_all().await?)
    }
}
