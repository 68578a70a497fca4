//! Compile-time configuration of a list screen's query behavior.

use contracts::list::{keys, SortOrder};
use thiserror::Error;

/// One sortable column: its wire name and the direction its header toggle
/// starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField {
    pub name: &'static str,
    pub primary: SortOrder,
}

impl SortField {
    pub const fn asc(name: &'static str) -> Self {
        Self {
            name,
            primary: SortOrder::Asc,
        }
    }

    pub const fn desc(name: &'static str) -> Self {
        Self {
            name,
            primary: SortOrder::Desc,
        }
    }
}

/// Structural configuration mistakes. These are programming errors, so the
/// controller constructor panics on them instead of limping along.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sort whitelist is empty")]
    EmptySortWhitelist,
    #[error("duplicate sort field `{0}`")]
    DuplicateSortField(&'static str),
    #[error("duplicate filter key `{0}`")]
    DuplicateFilterKey(&'static str),
    #[error("filter key `{0}` collides with a reserved parameter")]
    ReservedFilterKey(&'static str),
}

/// Everything a screen fixes at compile time about its list query.
///
/// `default_sort` and `default_order` form the baseline sort the three-way
/// column toggle returns to. `filter_keys` declares the extra-filter
/// vocabulary; edits under undeclared keys are rejected.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub endpoint: &'static str,
    pub sort_fields: &'static [SortField],
    pub default_sort: &'static str,
    pub default_order: SortOrder,
    pub default_limit: u64,
    pub limit_options: &'static [u64],
    pub filter_keys: &'static [&'static str],
}

impl ListConfig {
    /// Looks up a whitelisted sort field by wire name.
    pub fn sort_field(&self, name: &str) -> Option<&SortField> {
        self.sort_fields.iter().find(|f| f.name == name)
    }

    pub fn has_filter_key(&self, key: &str) -> bool {
        self.filter_keys.contains(&key)
    }

    /// The sort the screen starts on and returns to. Falls back to the
    /// first whitelisted field when `default_sort` is not listed.
    pub fn baseline_sort(&self) -> (&'static str, SortOrder) {
        match self.sort_field(self.default_sort) {
            Some(field) => (field.name, self.default_order),
            None => {
                // sort_fields is non-empty for every validated config
                let first = &self.sort_fields[0];
                log::warn!(
                    "{}: default sort `{}` is not whitelisted, falling back to `{}`",
                    self.endpoint,
                    self.default_sort,
                    first.name
                );
                (first.name, self.default_order)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sort_fields.is_empty() {
            return Err(ConfigError::EmptySortWhitelist);
        }
        for (i, field) in self.sort_fields.iter().enumerate() {
            if self.sort_fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateSortField(field.name));
            }
        }
        for (i, key) in self.filter_keys.iter().enumerate() {
            if self.filter_keys[..i].contains(key) {
                return Err(ConfigError::DuplicateFilterKey(*key));
            }
            if keys::RESERVED.contains(key) {
                return Err(ConfigError::ReservedFilterKey(*key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VALID: ListConfig = ListConfig {
        endpoint: "/api/things",
        sort_fields: &[SortField::asc("name"), SortField::desc("createdAt")],
        default_sort: "name",
        default_order: SortOrder::Asc,
        default_limit: 20,
        limit_options: &[20, 50],
        filter_keys: &["status"],
    };

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(VALID.validate(), Ok(()));
        assert_eq!(VALID.baseline_sort(), ("name", SortOrder::Asc));
    }

    #[test]
    fn test_empty_whitelist_rejected() {
        let config = ListConfig {
            sort_fields: &[],
            ..VALID.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySortWhitelist));
    }

    #[test]
    fn test_reserved_filter_key_rejected() {
        let config = ListConfig {
            filter_keys: &["status", "page"],
            ..VALID.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ReservedFilterKey("page"))
        );
    }

    #[test]
    fn test_duplicate_sort_field_rejected() {
        const DUPLICATED: &[SortField] = &[SortField::asc("name"), SortField::desc("name")];
        let config = ListConfig {
            sort_fields: DUPLICATED,
            ..VALID.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSortField("name"))
        );
    }

    #[test]
    fn test_unlisted_default_falls_back_to_first_field() {
        let config = ListConfig {
            default_sort: "missing",
            ..VALID.clone()
        };
        assert_eq!(config.baseline_sort(), ("name", SortOrder::Asc));
    }
}
