//! Ordered, api-ready parameters for one list request.

/// Parameter names fixed by the backend list contract.
pub mod keys {
    pub const PAGE: &str = "page";
    pub const LIMIT: &str = "limit";
    pub const SEARCH: &str = "search";
    pub const SORT_FIELD: &str = "sortField";
    pub const SORT_ORDER: &str = "sortOrder";

    /// Extra-filter keys must not collide with these.
    pub const RESERVED: &[&str] = &[PAGE, LIMIT, SEARCH, SORT_FIELD, SORT_ORDER];
}

/// Ordered `(key, value)` pairs for one list request.
///
/// Pair order is insertion order, and the derivation always pushes in the
/// same sequence, so equal parameter sets render byte-identical query
/// strings. The client uses that string as its re-fetch key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encoded `key=value` pairs joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_preserves_order() {
        let mut params = RequestParams::new();
        params.push(keys::PAGE, "1");
        params.push(keys::LIMIT, "20");
        params.push(keys::SORT_FIELD, "name");
        assert_eq!(params.to_query_string(), "page=1&limit=20&sortField=name");
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let mut params = RequestParams::new();
        params.push(keys::SEARCH, "чёрная куртка & pants");
        let qs = params.to_query_string();
        assert!(qs.starts_with("search="));
        assert!(!qs.contains(' '));
        assert!(!qs.contains("& "));
        assert!(qs.contains("%26"));
    }

    #[test]
    fn test_get_returns_first_value() {
        let mut params = RequestParams::new();
        params.push("status", "active");
        assert_eq!(params.get("status"), Some("active"));
        assert_eq!(params.get("missing"), None);
    }
}
