//! Реестр списочных экранов админки.
//!
//! Каждый модуль фиксирует конфигурацию запроса своего экрана; реестр
//! отдаёт её по слагу маршрута.

use std::collections::BTreeMap;

use contracts::list::{FilterValue, ALL};
use once_cell::sync::Lazy;

use crate::shared::list_query::ListConfig;

pub mod brands;
pub mod categories;
pub mod discounts;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod shipments;
pub mod stock;
pub mod users;
pub mod vouchers;

// ─── Общие словари фильтров ─────────────────────────────────────────────────

/// Линза мягкого удаления для экранов с корзиной.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    Active,
    Trashed,
    /// Показывать всё; в запрос фильтр не попадает.
    All,
}

impl ViewFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewFilter::Active => "active",
            ViewFilter::Trashed => "trashed",
            ViewFilter::All => ALL,
        }
    }
}

impl From<ViewFilter> for FilterValue {
    fn from(value: ViewFilter) -> Self {
        FilterValue::from(value.as_str())
    }
}

// ─── Реестр экранов ─────────────────────────────────────────────────────────

pub static SCREENS: Lazy<BTreeMap<&'static str, &'static ListConfig>> = Lazy::new(|| {
    BTreeMap::from([
        ("brands", &brands::CONFIG),
        ("categories", &categories::CONFIG),
        ("discounts", &discounts::CONFIG),
        ("orders", &orders::CONFIG),
        ("products", &products::CONFIG),
        ("reviews", &reviews::CONFIG),
        ("shipments", &shipments::CONFIG),
        ("stock", &stock::CONFIG),
        ("users", &users::CONFIG),
        ("vouchers", &vouchers::CONFIG),
    ])
});

/// Конфигурация экрана по слагу маршрута.
pub fn by_slug(slug: &str) -> Option<&'static ListConfig> {
    SCREENS.get(slug).copied()
}
