//! Product review moderation list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/reviews",
    sort_fields: &[SortField::desc("createdAt"), SortField::desc("rating")],
    default_sort: "createdAt",
    default_order: SortOrder::Desc,
    default_limit: 20,
    limit_options: &[20, 50, 100],
    filter_keys: &["status", "rating", "productId"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl From<ReviewStatus> for FilterValue {
    fn from(value: ReviewStatus) -> Self {
        FilterValue::from(value.as_str())
    }
}
