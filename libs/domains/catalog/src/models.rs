use database::{BaseEntity, NoInclude, Value};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product brand (e.g. "Angular", "NetCore")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductBrand {
    pub id: i32,
    pub name: String,
}

/// Product type (e.g. "Boards", "Hats")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductType {
    pub id: i32,
    pub name: String,
}

/// Catalog product.
///
/// `product_brand` and `product_type` stay `None` unless the specification
/// that loaded the product asked for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Relative picture path, e.g. `images/products/sb-ang1.png`
    pub picture_url: String,
    pub product_type_id: i32,
    pub product_brand_id: i32,
    pub product_type: Option<ProductType>,
    pub product_brand: Option<ProductBrand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Description,
    Price,
    PictureUrl,
    ProductTypeId,
    ProductBrandId,
}

/// Associations of a product that a specification can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductInclude {
    ProductBrand,
    ProductType,
}

impl BaseEntity for Product {
    type Field = ProductField;
    type Include = ProductInclude;
    const NAME: &'static str = "product";
    const ID_FIELD: ProductField = ProductField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, field: ProductField) -> Value {
        match field {
            ProductField::Id => self.id.into(),
            ProductField::Name => self.name.as_str().into(),
            ProductField::Description => self.description.as_str().into(),
            ProductField::Price => self.price.into(),
            ProductField::PictureUrl => self.picture_url.as_str().into(),
            ProductField::ProductTypeId => self.product_type_id.into(),
            ProductField::ProductBrandId => self.product_brand_id.into(),
        }
    }
}

/// Fields of the brand and type lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Id,
    Name,
}

impl BaseEntity for ProductBrand {
    type Field = LookupField;
    type Include = NoInclude;
    const NAME: &'static str = "product_brand";
    const ID_FIELD: LookupField = LookupField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, field: LookupField) -> Value {
        match field {
            LookupField::Id => self.id.into(),
            LookupField::Name => self.name.as_str().into(),
        }
    }
}

impl BaseEntity for ProductType {
    type Field = LookupField;
    type Include = NoInclude;
    const NAME: &'static str = "product_type";
    const ID_FIELD: LookupField = LookupField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn field(&self, field: LookupField) -> Value {
        match field {
            LookupField::Id => self.id.into(),
            LookupField::Name => self.name.as_str().into(),
        }
    }
}
