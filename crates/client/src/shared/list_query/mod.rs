//! Core of every list screen: whitelisted sort configuration, canonical
//! query state, and pure derivation of request parameters and cache keys.

pub mod config;
pub mod controller;
pub mod state;

// Re-exports
pub use config::{ConfigError, ListConfig, SortField};
pub use controller::{CacheKey, ListController};
pub use state::{ListPatch, ListState};
