//! SeaORM table definitions for the catalog.

pub mod product;
pub mod product_brand;
pub mod product_type;
