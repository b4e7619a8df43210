//! Catalog queries expressed as [`Specification`]s.
//!
//! The list and count specifications share [`product_filters`], so the
//! `count` of a page always describes the same row set as its `data`.

use database::{Criteria, Specification};

use crate::models::{Product, ProductField, ProductInclude};
use crate::params::{ProductSort, ProductSpecParams};

/// One product with its brand and type loaded.
pub fn product_with_types_and_brands(id: i32) -> Specification<Product> {
    Specification::new(Some(Criteria::eq(ProductField::Id, id)))
        .add_include(ProductInclude::ProductType)
        .add_include(ProductInclude::ProductBrand)
}

/// One page of products matching `params`, with brand and type loaded.
pub fn products_with_types_and_brands(params: &ProductSpecParams) -> Specification<Product> {
    let spec = Specification::new(product_filters(params))
        .add_include(ProductInclude::ProductType)
        .add_include(ProductInclude::ProductBrand);

    let spec = match params.sort() {
        ProductSort::PriceAsc => spec.apply_order_by(ProductField::Price),
        ProductSort::PriceDesc => spec.apply_order_by_descending(ProductField::Price),
        ProductSort::Name => spec.apply_order_by(ProductField::Name),
    };

    spec.apply_paging(params.skip(), u64::from(params.page_size()))
}

/// Same filters as [`products_with_types_and_brands`], for counting.
pub fn products_with_filters_for_count(params: &ProductSpecParams) -> Specification<Product> {
    Specification::new(product_filters(params))
}

/// Conjunction of the filters present in `params`.
pub fn product_filters(params: &ProductSpecParams) -> Option<Criteria<ProductField>> {
    let clauses = [
        params
            .brand_id
            .map(|id| Criteria::eq(ProductField::ProductBrandId, id)),
        params
            .type_id
            .map(|id| Criteria::eq(ProductField::ProductTypeId, id)),
        params
            .search()
            .map(|term| Criteria::contains(ProductField::Name, term)),
    ];

    Criteria::all_of(clauses.into_iter().flatten())
}
