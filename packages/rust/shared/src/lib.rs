//! Shared types, error model, and configuration for docwiki.
//!
//! This crate is the foundation depended on by all other docwiki crates.
//! It provides:
//! - [`DocWikiError`] — the unified error type
//! - Domain types ([`Provider`], [`NavSignature`])
//! - Configuration ([`AppConfig`], [`WikiConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, NavigationConfig, SiteConfig, WikiConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{DocWikiError, Result};
pub use types::{DEFAULT_COLUMNS, DEFAULT_PROVIDERS, NavSignature, Provider};
