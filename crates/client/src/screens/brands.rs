//! Brand directory list screen.

use contracts::list::SortOrder;

use crate::shared::list_query::{ListConfig, SortField};

pub static CONFIG: ListConfig = ListConfig {
    endpoint: "/api/brands",
    sort_fields: &[
        SortField::asc("priority"),
        SortField::asc("name"),
        SortField::desc("createdAt"),
    ],
    default_sort: "priority",
    default_order: SortOrder::Asc,
    default_limit: 20,
    limit_options: &[20, 50, 100],
    filter_keys: &["view"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ViewFilter;
    use crate::shared::list_query::ListController;

    #[test]
    fn test_all_view_means_no_filter() {
        let mut controller = ListController::new(&CONFIG);
        controller.set_filter("view", ViewFilter::Trashed);
        assert_eq!(controller.api_params().get("view"), Some("trashed"));

        controller.set_filter("view", ViewFilter::All);
        assert_eq!(controller.api_params().get("view"), None);
    }
}
