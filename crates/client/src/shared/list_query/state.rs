//! Canonical query state of one list screen and partial updates to it.

use std::collections::BTreeMap;

use contracts::list::{FilterValue, SortOrder};

/// Query state of one mounted list screen.
///
/// `filters` holds only applied values: the controller drops empty
/// strings, the `all` sentinel and empty lists at edit time, so states
/// that derive the same request also compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// Trimmed search text; empty means no text filter.
    pub search: String,
    /// Always one of the whitelisted sort fields.
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// 1-based page number, never below 1.
    pub page: u64,
    /// Page size, never below 1.
    pub limit: u64,
    pub filters: BTreeMap<String, FilterValue>,
}

/// Partial update to a [`ListState`]. Unset fields stay unchanged; a
/// `None` filter edit clears its key.
#[derive(Debug, Clone, Default)]
pub struct ListPatch {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub filters: Vec<(String, Option<FilterValue>)>,
}

impl ListPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.push((key.into(), Some(value.into())));
        self
    }

    pub fn clear_filter(mut self, key: impl Into<String>) -> Self {
        self.filters.push((key.into(), None));
        self
    }

    /// Whether the patch sets anything besides `page`. Such patches always
    /// send pagination back to the first page.
    pub fn touches_non_page(&self) -> bool {
        self.search.is_some()
            || self.sort_by.is_some()
            || self.sort_order.is_some()
            || self.limit.is_some()
            || !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_only_patch_does_not_touch_non_page() {
        assert!(!ListPatch::new().page(7).touches_non_page());
    }

    #[test]
    fn test_other_fields_touch_non_page() {
        assert!(ListPatch::new().search("x").touches_non_page());
        assert!(ListPatch::new().limit(50).touches_non_page());
        assert!(ListPatch::new()
            .sort("name", SortOrder::Asc)
            .touches_non_page());
        assert!(ListPatch::new().filter("status", "active").touches_non_page());
        assert!(ListPatch::new().clear_filter("status").touches_non_page());
    }
}
