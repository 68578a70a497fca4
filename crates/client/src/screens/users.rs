//! User management list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/users",
    sort_fields: &[
        SortField::asc("name"),
        SortField::desc("createdAt"),
        SortField::desc("lastLoginAt"),
    ],
    default_sort: "name",
    default_order: SortOrder::Asc,
    default_limit: 50,
    limit_options: &[50, 100, 200],
    filter_keys: &["roles", "status", "view"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl From<UserStatus> for FilterValue {
    fn from(value: UserStatus) -> Self {
        FilterValue::from(value.as_str())
    }
}
