//! Discount campaign list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/discounts",
    sort_fields: &[
        SortField::asc("priority"),
        SortField::desc("startsAt"),
        SortField::desc("createdAt"),
    ],
    default_sort: "priority",
    default_order: SortOrder::Asc,
    default_limit: 20,
    limit_options: &[20, 50, 100],
    filter_keys: &["state", "view"],
};

/// Campaign lifecycle relative to its start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountState {
    Scheduled,
    Running,
    Expired,
}

impl DiscountState {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountState::Scheduled => "scheduled",
            DiscountState::Running => "running",
            DiscountState::Expired => "expired",
        }
    }
}

impl From<DiscountState> for FilterValue {
    fn from(value: DiscountState) -> Self {
        FilterValue::from(value.as_str())
    }
}
