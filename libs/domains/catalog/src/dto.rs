use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductToReturnDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Absolute picture URL, `null` when the product has no picture
    pub picture_url: Option<String>,
    /// Type name, `null` when the type was not loaded
    pub product_type: Option<String>,
    /// Brand name, `null` when the brand was not loaded
    pub product_brand: Option<String>,
}

/// Converts products into [`ProductToReturnDto`]s.
#[derive(Debug, Clone)]
pub struct ProductMapper {
    api_url: String,
}

impl ProductMapper {
    /// `api_url` is prepended verbatim to relative picture paths.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    pub fn map(&self, product: Product) -> ProductToReturnDto {
        let picture_url = (!product.picture_url.is_empty())
            .then(|| format!("{}{}", self.api_url, product.picture_url));

        ProductToReturnDto {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            picture_url,
            product_type: product.product_type.map(|t| t.name),
            product_brand: product.product_brand.map(|b| b.name),
        }
    }

    pub fn map_all(&self, products: Vec<Product>) -> Vec<ProductToReturnDto> {
        products.into_iter().map(|p| self.map(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProductBrand, ProductType};
    use serde_json::json;

    fn board() -> Product {
        Product {
            id: 1,
            name: "Angular Speedster Board 2000".into(),
            description: "Lorem ipsum".into(),
            price: 200.0,
            picture_url: "images/products/sb-ang1.png".into(),
            product_type_id: 1,
            product_brand_id: 1,
            product_type: Some(ProductType {
                id: 1,
                name: "Boards".into(),
            }),
            product_brand: Some(ProductBrand {
                id: 1,
                name: "Angular".into(),
            }),
        }
    }

    #[test]
    fn test_map_prefixes_picture_and_flattens_names() {
        let mapper = ProductMapper::new("http://localhost:8080/");

        let dto = mapper.map(board());

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 1,
                "name": "Angular Speedster Board 2000",
                "description": "Lorem ipsum",
                "price": 200.0,
                "pictureUrl": "http://localhost:8080/images/products/sb-ang1.png",
                "productType": "Boards",
                "productBrand": "Angular"
            })
        );
    }

    #[test]
    fn test_map_without_includes_leaves_names_empty() {
        let mapper = ProductMapper::new("https://cdn.example.com/");
        let product = Product {
            product_type: None,
            product_brand: None,
            ..board()
        };

        let dto = mapper.map(product);

        assert_eq!(dto.product_type, None);
        assert_eq!(dto.product_brand, None);
    }

    #[test]
    fn test_empty_picture_is_not_prefixed() {
        let mapper = ProductMapper::new("http://localhost:8080/");
        let product = Product {
            picture_url: String::new(),
            ..board()
        };

        assert_eq!(mapper.map(product).picture_url, None);
    }

    #[test]
    fn test_map_all_preserves_order() {
        let mapper = ProductMapper::new("");
        let second = Product {
            id: 2,
            ..board()
        };

        let ids: Vec<i32> = mapper
            .map_all(vec![second, board()])
            .iter()
            .map(|d| d.id)
            .collect();

        assert_eq!(ids, vec![2, 1]);
    }
}
