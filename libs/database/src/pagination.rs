use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of results plus the total number of matches.
///
/// `count` is the number of rows matching the filter before paging, so
/// `data.len() <= page_size` while `count` may be larger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    /// 1-based page number
    pub page_index: u32,
    pub page_size: u32,
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(page_index: u32, page_size: u32, count: u64, data: Vec<T>) -> Self {
        Self {
            page_index,
            page_size,
            count,
            data,
        }
    }

    /// Number of pages needed to hold `count` rows.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.count.div_ceil(u64::from(self.page_size))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            page_index: self.page_index,
            page_size: self.page_size,
            count: self.count,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let page = Pagination::new(2, 6, 18, vec!["a", "b"]);

        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(
            value,
            json!({ "pageIndex": 2, "pageSize": 6, "count": 18, "data": ["a", "b"] })
        );
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Pagination::<()>::new(1, 6, 18, vec![]).total_pages(), 3);
        assert_eq!(Pagination::<()>::new(1, 6, 19, vec![]).total_pages(), 4);
        assert_eq!(Pagination::<()>::new(1, 6, 0, vec![]).total_pages(), 0);
        assert_eq!(Pagination::<()>::new(1, 0, 5, vec![]).total_pages(), 0);
    }

    #[test]
    fn test_map_keeps_envelope() {
        let page = Pagination::new(3, 2, 5, vec![1, 2]).map(|n| n * 10);

        assert_eq!(page.page_index, 3);
        assert_eq!(page.count, 5);
        assert_eq!(page.data, vec![10, 20]);
    }
}
