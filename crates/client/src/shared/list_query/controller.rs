//! The list query controller. Screens drive their fetches through this
//! instead of hand-rolled per-screen state and URL assembly.

use std::collections::BTreeMap;
use std::fmt;

use contracts::list::{keys, FilterValue, RequestParams};

use super::config::ListConfig;
use super::state::{ListPatch, ListState};

/// Deterministic identity of one derived request. Consumers re-fetch
/// whenever the key changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owns the query state of one mounted list screen.
///
/// All operations are synchronous and never fail: out-of-range values are
/// clamped, unlisted sort fields fall back to the baseline sort, and any
/// change to a non-page field resets pagination to the first page.
#[derive(Debug, Clone)]
pub struct ListController {
    config: &'static ListConfig,
    state: ListState,
}

impl ListController {
    /// Builds a controller in the screen's default state.
    ///
    /// Panics when the config is structurally broken (empty sort
    /// whitelist, duplicate or reserved keys): that is a programming
    /// error, not an input condition.
    pub fn new(config: &'static ListConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("list config for {}: {}", config.endpoint, err);
        }
        let (sort_by, sort_order) = config.baseline_sort();
        Self {
            config,
            state: ListState {
                search: String::new(),
                sort_by: sort_by.to_string(),
                sort_order,
                page: 1,
                limit: config.default_limit.max(1),
                filters: BTreeMap::new(),
            },
        }
    }

    /// Builds a controller with screen-supplied initial values, for
    /// example restored from the URL. Unlike [`ListController::apply`],
    /// an initial page survives alongside other fields; it is only
    /// clamped.
    pub fn with_defaults(config: &'static ListConfig, defaults: ListPatch) -> Self {
        let mut controller = Self::new(config);
        let page = defaults.page;
        controller.merge(defaults);
        controller.state.page = page.unwrap_or(1).max(1);
        controller
    }

    pub fn config(&self) -> &'static ListConfig {
        self.config
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Merges a partial update. A patch touching anything besides `page`
    /// always lands on the first page, even when it carries an explicit
    /// page value; a pure page patch just moves, clamped to >= 1.
    pub fn apply(&mut self, patch: ListPatch) {
        let reset = patch.touches_non_page();
        let page = patch.page;
        self.merge(patch);
        self.state.page = if reset {
            1
        } else {
            page.unwrap_or(self.state.page).max(1)
        };
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.apply(ListPatch::new().search(text));
    }

    pub fn set_page(&mut self, page: u64) {
        self.apply(ListPatch::new().page(page));
    }

    pub fn set_limit(&mut self, limit: u64) {
        self.apply(ListPatch::new().limit(limit));
    }

    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.apply(ListPatch::new().filter(key, value));
    }

    pub fn clear_filter(&mut self, key: impl Into<String>) {
        self.apply(ListPatch::new().clear_filter(key));
    }

    /// Back to the screen's default state.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Column-header toggle: the first click sorts by the field in its
    /// primary direction, the second flips it, the third returns to the
    /// baseline sort. Every click resets pagination.
    pub fn toggle_sort(&mut self, field: &str) {
        let (baseline_field, baseline_order) = self.config.baseline_sort();
        let (sort_by, sort_order) = match self.config.sort_field(field) {
            None => {
                log::warn!(
                    "{}: unlisted sort field `{}`, using baseline sort",
                    self.config.endpoint,
                    field
                );
                (baseline_field.to_string(), baseline_order)
            }
            Some(f) if self.state.sort_by != f.name => (f.name.to_string(), f.primary),
            Some(f) if self.state.sort_order == f.primary => {
                (f.name.to_string(), f.primary.opposite())
            }
            _ => (baseline_field.to_string(), baseline_order),
        };
        self.state.sort_by = sort_by;
        self.state.sort_order = sort_order;
        self.state.page = 1;
    }

    /// Pure derivation of the request parameters: paging and sorting
    /// always; `search` only when non-empty; declared filters only with
    /// applied values, in declaration order.
    pub fn api_params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.push(keys::PAGE, self.state.page.to_string());
        params.push(keys::LIMIT, self.state.limit.to_string());
        params.push(keys::SORT_FIELD, self.state.sort_by.clone());
        params.push(keys::SORT_ORDER, self.state.sort_order.as_str());
        if !self.state.search.is_empty() {
            params.push(keys::SEARCH, self.state.search.clone());
        }
        for key in self.config.filter_keys {
            if let Some(value) = self.state.filters.get(*key) {
                if value.is_applied() {
                    params.push(*key, value.to_param());
                }
            }
        }
        params
    }

    /// Endpoint plus the canonical query string. Equal derived parameters
    /// always yield equal keys, and any parameter change changes the key.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey(format!(
            "{}?{}",
            self.config.endpoint,
            self.api_params().to_query_string()
        ))
    }

    fn merge(&mut self, patch: ListPatch) {
        if let Some(text) = patch.search {
            self.state.search = text.trim().to_string();
        }
        let mut sort_order = patch.sort_order;
        if let Some(field) = patch.sort_by {
            match self.config.sort_field(&field) {
                Some(f) => self.state.sort_by = f.name.to_string(),
                None => {
                    log::warn!(
                        "{}: unlisted sort field `{}`, using baseline sort",
                        self.config.endpoint,
                        field
                    );
                    let (name, order) = self.config.baseline_sort();
                    self.state.sort_by = name.to_string();
                    self.state.sort_order = order;
                    // The requested sort is rejected as a whole, order included.
                    sort_order = None;
                }
            }
        }
        if let Some(order) = sort_order {
            self.state.sort_order = order;
        }
        if let Some(limit) = patch.limit {
            self.state.limit = limit.max(1);
        }
        for (key, value) in patch.filters {
            self.edit_filter(key, value);
        }
    }

    fn edit_filter(&mut self, key: String, value: Option<FilterValue>) {
        if !self.config.has_filter_key(&key) {
            log::warn!(
                "{}: ignoring undeclared filter key `{}`",
                self.config.endpoint,
                key
            );
            return;
        }
        match value {
            Some(v) if v.is_applied() => {
                self.state.filters.insert(key, v);
            }
            // Non-applied values (empty, `all`, empty list) clear the key
            // so the state stays canonical.
            _ => {
                self.state.filters.remove(&key);
            }
        }
    }
}
