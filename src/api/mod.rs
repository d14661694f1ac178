//! HTTP client for the Carflix backend
//!
//! - catalog: show listing, show detail, library reload, derived media URLs

pub mod catalog;

pub use catalog::{ApiError, CatalogClient};
