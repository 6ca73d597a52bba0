//! Shared configuration and company registry for esgdb.
//!
//! Holds the env-driven application config, the YAML-backed registry of
//! companies to analyze, and small text helpers used by the collection
//! crates.

pub mod app_config;
pub mod config;
pub mod error;
pub mod registry;
pub mod text;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use registry::{load_companies, CompaniesFile, Company};
pub use text::truncate_chars;
