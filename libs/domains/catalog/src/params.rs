use serde::Deserialize;
use strum::{Display, EnumString};
use utoipa::IntoParams;
use validator::Validate;

/// Largest page a client can ask for; bigger sizes are clamped.
pub const MAX_PAGE_SIZE: u32 = 50;
pub const DEFAULT_PAGE_SIZE: u32 = 6;

fn default_page_index() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Product listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ProductSort {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
}

/// Query parameters of `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductSpecParams {
    /// 1-based page number
    #[serde(default = "default_page_index")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page_index: u32,

    /// Page size, clamped to 50
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, maximum = 50, default = 6)]
    pub page_size: u32,

    pub brand_id: Option<i32>,

    pub type_id: Option<i32>,

    /// Case-insensitive substring of the product name
    pub search: Option<String>,

    /// `priceAsc` or `priceDesc`; anything else sorts by name
    pub sort: Option<String>,
}

impl Default for ProductSpecParams {
    fn default() -> Self {
        Self {
            page_index: default_page_index(),
            page_size: default_page_size(),
            brand_id: None,
            type_id: None,
            search: None,
            sort: None,
        }
    }
}

impl ProductSpecParams {
    pub fn page_size(&self) -> u32 {
        self.page_size.min(MAX_PAGE_SIZE)
    }

    /// Rows to skip for the requested page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page_index.saturating_sub(1)) * u64::from(self.page_size())
    }

    /// Trimmed, lower-cased search term; blank means no search.
    pub fn search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn sort(&self) -> ProductSort {
        self.sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
