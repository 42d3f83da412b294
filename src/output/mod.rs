//! Output module for rendering and writing crawl results
//!
//! This module handles:
//! - Rendering products into HTML fragments
//! - Writing fragments to a sink (normally the output file)
//! - Reporting crawl statistics

mod render;
mod sink;
pub mod stats;

pub use render::{escape_html, render_product};
pub use sink::{FileSink, ProductSink};
pub use stats::{print_report, CrawlReport};

use crate::catalog::ProductRegistry;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders every product in registry order and hands the fragments to a sink
///
/// # Arguments
///
/// * `registry` - The products to write
/// * `sink` - Destination for the rendered fragments
/// * `escape` - HTML-escape product fields
///
/// # Returns
///
/// * `Ok(usize)` - Number of fragments written
/// * `Err(OutputError)` - The sink failed
pub fn write_products(
    registry: &ProductRegistry,
    sink: &mut dyn ProductSink,
    escape: bool,
) -> OutputResult<usize> {
    let fragments: Vec<String> = registry
        .iter()
        .map(|product| render_product(product, escape))
        .collect();

    sink.write_fragments(&fragments)?;
    Ok(fragments.len())
}
