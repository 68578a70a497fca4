//! Product catalogue list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/products",
    sort_fields: &[
        SortField::asc("priority"),
        SortField::asc("name"),
        SortField::desc("price"),
        SortField::desc("createdAt"),
        SortField::desc("updatedAt"),
    ],
    default_sort: "priority",
    default_order: SortOrder::Asc,
    default_limit: 20,
    limit_options: &[10, 20, 50, 100],
    filter_keys: &["status", "brandId", "categoryId", "gender", "view"],
};

/// Values of the `status` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }
}

impl From<ProductStatus> for FilterValue {
    fn from(value: ProductStatus) -> Self {
        FilterValue::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListController;

    #[test]
    fn test_default_request_line() {
        let controller = ListController::new(&CONFIG);
        assert_eq!(
            controller.api_params().to_query_string(),
            "page=1&limit=20&sortField=priority&sortOrder=ASC"
        );
        assert_eq!(
            controller.cache_key().as_str(),
            "/api/products?page=1&limit=20&sortField=priority&sortOrder=ASC"
        );
    }

    #[test]
    fn test_status_filter_round() {
        let mut controller = ListController::new(&CONFIG);
        controller.set_filter("status", ProductStatus::Draft);
        assert_eq!(controller.api_params().get("status"), Some("draft"));
    }
}
