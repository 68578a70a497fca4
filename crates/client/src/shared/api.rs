//! Request URL assembly against the backend base URL.

use contracts::list::RequestParams;

/// Normalized base URL of the admin backend, e.g. `http://localhost:3000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    /// Trailing slashes are trimmed so endpoint paths can start with `/`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Full GET URL for one list fetch.
    pub fn list_url(&self, endpoint: &str, params: &RequestParams) -> String {
        if params.is_empty() {
            self.url(endpoint)
        } else {
            format!("{}{}?{}", self.base, endpoint, params.to_query_string())
        }
    }
}
