//! YourRoom Places - municipality directory and location autocomplete
//!
//! Loads the Spanish municipality reference dataset once, normalizes labels
//! for accent and case insensitive matching, and ranks suggestions for the
//! location inputs of the YourRoom listing flows.

pub mod cli;
pub mod core;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::AppConfig,
    directory::MunicipalityDirectory,
    error::{AppError, AppResult},
    loader::{parse_dataset, reorder_article},
    matcher::{filter, DEFAULT_LIMIT, MIN_QUERY_CHARS},
    models::{MunicipalityRecord, Province},
    normalize::normalize,
    source::{BundledDataset, DatasetSource, FileDataset, InlineDataset},
};

pub use web::{
    handlers::api::ApiState,
    routes::create_routes,
    server::WebServer,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
