//! Category tree list screen.

use contracts::list::SortOrder;

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/categories",
    sort_fields: &[
        SortField::asc("priority"),
        SortField::asc("name"),
        SortField::desc("createdAt"),
    ],
    default_sort: "priority",
    default_order: SortOrder::Asc,
    default_limit: 50,
    limit_options: &[50, 100, 200],
    filter_keys: &["parentId", "view"],
};
