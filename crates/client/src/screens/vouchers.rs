//! Экран ваучеров (промокодов).

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/vouchers",
    sort_fields: &[
        SortField::asc("code"),
        SortField::desc("expiresAt"),
        SortField::desc("createdAt"),
    ],
    default_sort: "code",
    default_order: SortOrder::Asc,
    default_limit: 50,
    limit_options: &[50, 100, 200],
    filter_keys: &["state", "view"],
};

/// Состояние ваучера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoucherState {
    Active,
    Redeemed,
    Expired,
}

impl VoucherState {
    pub fn as_str(self) -> &'static str {
        match self {
            VoucherState::Active => "active",
            VoucherState::Redeemed => "redeemed",
            VoucherState::Expired => "expired",
        }
    }
}

impl From<VoucherState> for FilterValue {
    fn from(value: VoucherState) -> Self {
        FilterValue::from(value.as_str())
    }
}
