//! Configuration module for Shelfwalk
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use shelfwalk::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("shelfwalk.toml")).unwrap();
//! println!("Crawl starts at: {}", config.seed_url());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, OutputConfig, SeedConfig, SiteConfig, SiteProfile, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, hash_bytes, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_product_id};
