//! List-request vocabulary: sort direction, extra-filter values, the
//! api-ready parameter set, and the paged response envelope.

pub mod filter;
pub mod page;
pub mod request;
pub mod sort;

// Re-exports
pub use filter::{FilterValue, ALL};
pub use page::{Page, PageMeta};
pub use request::{keys, RequestParams};
pub use sort::SortOrder;
