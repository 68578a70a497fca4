pub mod api;
pub mod fetch_guard;
pub mod list_query;
