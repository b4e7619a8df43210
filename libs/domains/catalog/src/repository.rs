use database::{GenericRepository, InMemoryRepository, SeaOrmRepository};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Product, ProductBrand, ProductInclude, ProductType};

/// The three repositories the catalog reads from.
#[derive(Clone)]
pub struct CatalogRepositories {
    pub products: Arc<dyn GenericRepository<Product>>,
    pub brands: Arc<dyn GenericRepository<ProductBrand>>,
    pub types: Arc<dyn GenericRepository<ProductType>>,
}

impl CatalogRepositories {
    /// PostgreSQL-backed repositories sharing one connection pool.
    pub fn postgres(db: DatabaseConnection) -> Self {
        Self {
            products: Arc::new(SeaOrmRepository::<Product>::new(db.clone())),
            brands: Arc::new(SeaOrmRepository::<ProductBrand>::new(db.clone())),
            types: Arc::new(SeaOrmRepository::<ProductType>::new(db)),
        }
    }

    /// In-memory repositories over fixed rows.
    ///
    /// Product includes resolve against `brands` and `types`; an unknown
    /// foreign key leaves the association `None`.
    pub fn in_memory(
        brands: Vec<ProductBrand>,
        types: Vec<ProductType>,
        products: Vec<Product>,
    ) -> Self {
        let brand_by_id: HashMap<i32, ProductBrand> =
            brands.iter().map(|b| (b.id, b.clone())).collect();
        let type_by_id: HashMap<i32, ProductType> =
            types.iter().map(|t| (t.id, t.clone())).collect();

        let products = InMemoryRepository::from_rows(products)
            .with_include(ProductInclude::ProductBrand, move |p: &mut Product| {
                p.product_brand = brand_by_id.get(&p.product_brand_id).cloned();
            })
            .with_include(ProductInclude::ProductType, move |p: &mut Product| {
                p.product_type = type_by_id.get(&p.product_type_id).cloned();
            });

        Self {
            products: Arc::new(products),
            brands: Arc::new(InMemoryRepository::from_rows(brands)),
            types: Arc::new(InMemoryRepository::from_rows(types)),
        }
    }
}

impl std::fmt::Debug for CatalogRepositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogRepositories").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specifications::product_with_types_and_brands;

    fn product(id: i32, brand: i32, kind: i32) -> Product {
        Product {
            id,
            name: format!("product-{}", id),
            description: String::new(),
            price: 10.0,
            picture_url: String::new(),
            product_type_id: kind,
            product_brand_id: brand,
            product_type: None,
            product_brand: None,
        }
    }

    fn repos() -> CatalogRepositories {
        CatalogRepositories::in_memory(
            vec![ProductBrand {
                id: 1,
                name: "Angular".into(),
            }],
            vec![ProductType {
                id: 1,
                name: "Boards".into(),
            }],
            vec![product(1, 1, 1), product(2, 9, 1)],
        )
    }

    #[tokio::test]
    async fn test_in_memory_resolves_includes() {
        let repos = repos();

        let found = repos
            .products
            .get_entity_with_spec(&product_with_types_and_brands(1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.product_brand.unwrap().name, "Angular");
        assert_eq!(found.product_type.unwrap().name, "Boards");
    }

    #[tokio::test]
    async fn test_unknown_foreign_key_leaves_association_empty() {
        let repos = repos();

        let found = repos
            .products
            .get_entity_with_spec(&product_with_types_and_brands(2))
            .await
            .unwrap()
            .unwrap();

        assert!(found.product_brand.is_none());
        assert!(found.product_type.is_some());
    }

    #[tokio::test]
    async fn test_get_by_id_does_not_load_associations() {
        let repos = repos();

        let found = repos.products.get_by_id(1).await.unwrap().unwrap();

        assert!(found.product_brand.is_none());
        assert!(found.product_type.is_none());
    }

    #[tokio::test]
    async fn test_lookup_tables_list_all() {
        let repos = repos();

        assert_eq!(repos.brands.list_all().await.unwrap().len(), 1);
        assert_eq!(repos.types.list_all().await.unwrap().len(), 1);
    }
}
