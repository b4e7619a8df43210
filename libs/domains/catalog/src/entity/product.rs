use sea_orm::entity::prelude::*;

/// Catalog product row. Brand and type are stored as foreign keys only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub picture_url: String,
    pub product_type_id: i32,
    pub product_brand_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_brand::Entity",
        from = "Column::ProductBrandId",
        to = "super::product_brand::Column::Id"
    )]
    ProductBrand,
    #[sea_orm(
        belongs_to = "super::product_type::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_type::Column::Id"
    )]
    ProductType,
}

impl Related<super::product_brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductBrand.def()
    }
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            picture_url: model.picture_url,
            product_type_id: model.product_type_id,
            product_brand_id: model.product_brand_id,
            product_type: None,
            product_brand: None,
        }
    }
}
