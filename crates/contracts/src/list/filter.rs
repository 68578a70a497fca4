//! Extra-filter values a screen can attach to its list query.

use chrono::NaiveDate;
use uuid::Uuid;

/// Reserved dropdown value meaning "do not filter by this field".
pub const ALL: &str = "all";

/// A single extra-filter value. Scalars cover dropdowns, toggles, id and
/// date pickers; `List` covers multi-select filters.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    List(Vec<String>),
}

impl FilterValue {
    /// Whether the value actually narrows the result set. Empty strings,
    /// the [`ALL`] sentinel and empty lists do not.
    pub fn is_applied(&self) -> bool {
        match self {
            FilterValue::Str(s) => !s.is_empty() && s.as_str() != ALL,
            FilterValue::List(items) => !items.is_empty(),
            _ => true,
        }
    }

    /// Wire encoding of the value. Dates render as `YYYY-MM-DD`, lists are
    /// comma-joined; percent-encoding happens later, in the query string.
    pub fn to_param(&self) -> String {
        match self {
            FilterValue::Str(s) => s.clone(),
            FilterValue::Int(n) => n.to_string(),
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Uuid(id) => id.to_string(),
            FilterValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FilterValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        FilterValue::Uuid(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::List(value)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(value: &[&str]) -> Self {
        FilterValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}
