//! Catalog module for extracted product records
//!
//! # Components
//!
//! - `Product`: one product card as extracted from a recommendation page
//! - `ProductRegistry`: the id-keyed collection built up during a crawl
//! - `recommendation_url`: `{id}` template substitution shared by the
//!   extractor and the configuration

mod product;
mod registry;

// Re-export main types
pub use product::{recommendation_url, Product, ID_PLACEHOLDER};
pub use registry::ProductRegistry;
