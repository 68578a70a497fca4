//! Shipment tracking list screen.

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/shipments",
    sort_fields: &[SortField::desc("createdAt"), SortField::desc("fee")],
    default_sort: "createdAt",
    default_order: SortOrder::Desc,
    default_limit: 20,
    limit_options: &[20, 50, 100],
    filter_keys: &["status", "carrier", "dateFrom", "dateTo"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    Created,
    HandedOver,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::Created => "created",
            ShipmentStatus::HandedOver => "handed_over",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
        }
    }
}

impl From<ShipmentStatus> for FilterValue {
    fn from(value: ShipmentStatus) -> Self {
        FilterValue::from(value.as_str())
    }
}
