//! SeaORM bindings for the catalog entities.

use async_trait::async_trait;
use database::{SeaOrmEntity, SeaOrmRepository};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::{BTreeSet, HashMap};

use crate::entity::{product, product_brand, product_type};
use crate::models::{
    LookupField, Product, ProductBrand, ProductField, ProductInclude, ProductType,
};

pub type PgProductRepository = SeaOrmRepository<Product>;
pub type PgProductBrandRepository = SeaOrmRepository<ProductBrand>;
pub type PgProductTypeRepository = SeaOrmRepository<ProductType>;

#[async_trait]
impl SeaOrmEntity for Product {
    type Entity = product::Entity;

    fn column(field: ProductField) -> product::Column {
        match field {
            ProductField::Id => product::Column::Id,
            ProductField::Name => product::Column::Name,
            ProductField::Description => product::Column::Description,
            ProductField::Price => product::Column::Price,
            ProductField::PictureUrl => product::Column::PictureUrl,
            ProductField::ProductTypeId => product::Column::ProductTypeId,
            ProductField::ProductBrandId => product::Column::ProductBrandId,
        }
    }

    fn from_model(model: product::Model) -> Self {
        model.into()
    }

    async fn load_include(
        db: &DatabaseConnection,
        rows: &mut [Self],
        include: ProductInclude,
    ) -> Result<(), DbErr> {
        match include {
            ProductInclude::ProductBrand => {
                let ids: BTreeSet<i32> = rows.iter().map(|p| p.product_brand_id).collect();
                let brands: HashMap<i32, ProductBrand> = product_brand::Entity::find()
                    .filter(product_brand::Column::Id.is_in(ids))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|m| (m.id, m.into()))
                    .collect();

                for row in rows.iter_mut() {
                    row.product_brand = brands.get(&row.product_brand_id).cloned();
                }
            }
            ProductInclude::ProductType => {
                let ids: BTreeSet<i32> = rows.iter().map(|p| p.product_type_id).collect();
                let types: HashMap<i32, ProductType> = product_type::Entity::find()
                    .filter(product_type::Column::Id.is_in(ids))
                    .all(db)
                    .await?
                    .into_iter()
                    .map(|m| (m.id, m.into()))
                    .collect();

                for row in rows.iter_mut() {
                    row.product_type = types.get(&row.product_type_id).cloned();
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl SeaOrmEntity for ProductBrand {
    type Entity = product_brand::Entity;

    fn column(field: LookupField) -> product_brand::Column {
        match field {
            LookupField::Id => product_brand::Column::Id,
            LookupField::Name => product_brand::Column::Name,
        }
    }

    fn from_model(model: product_brand::Model) -> Self {
        model.into()
    }
}

#[async_trait]
impl SeaOrmEntity for ProductType {
    type Entity = product_type::Entity;

    fn column(field: LookupField) -> product_type::Column {
        match field {
            LookupField::Id => product_type::Column::Id,
            LookupField::Name => product_type::Column::Name,
        }
    }

    fn from_model(model: product_type::Model) -> Self {
        model.into()
    }
}
