//! Экран движений склада (приход, расход, резервы).

use contracts::list::{FilterValue, SortOrder};

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/stock/movements",
    sort_fields: &[
        SortField::desc("createdAt"),
        SortField::asc("sku"),
        SortField::desc("quantity"),
    ],
    default_sort: "createdAt",
    default_order: SortOrder::Desc,
    default_limit: 50,
    limit_options: &[50, 100, 200],
    filter_keys: &["warehouseId", "kind", "dateFrom", "dateTo"],
};

/// Вид движения по складскому регистру
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Receipt,
    Issue,
    Adjustment,
    Reservation,
    Release,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Receipt => "receipt",
            MovementKind::Issue => "issue",
            MovementKind::Adjustment => "adjustment",
            MovementKind::Reservation => "reservation",
            MovementKind::Release => "release",
        }
    }
}

impl From<MovementKind> for FilterValue {
    fn from(value: MovementKind) -> Self {
        FilterValue::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListController;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_renders_iso_dates() {
        let mut controller = ListController::new(&CONFIG);
        controller.set_filter("dateFrom", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        controller.set_filter("dateTo", NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let params = controller.api_params();
        assert_eq!(params.get("dateFrom"), Some("2024-02-01"));
        assert_eq!(params.get("dateTo"), Some("2024-02-29"));
    }

    #[test]
    fn test_newest_movements_first_by_default() {
        let controller = ListController::new(&CONFIG);
        assert_eq!(controller.state().sort_by, "createdAt");
        assert_eq!(controller.state().sort_order, SortOrder::Desc);
    }
}
