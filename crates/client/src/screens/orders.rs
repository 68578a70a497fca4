//! Order management list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/orders",
    sort_fields: &[
        SortField::desc("createdAt"),
        SortField::asc("number"),
        SortField::desc("total"),
    ],
    default_sort: "createdAt",
    default_order: SortOrder::Desc,
    default_limit: 20,
    limit_options: &[20, 50, 100],
    filter_keys: &["status", "customerId", "dateFrom", "dateTo"],
};

/// Order lifecycle states as the backend names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl From<OrderStatus> for FilterValue {
    fn from(value: OrderStatus) -> Self {
        FilterValue::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListController;

    #[test]
    fn test_picking_a_status_restarts_paging() {
        let mut controller = ListController::new(&CONFIG);
        controller.set_page(3);
        controller.set_filter("status", OrderStatus::Paid);

        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.api_params().get("status"), Some("paid"));
    }
}
