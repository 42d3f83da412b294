//! Crawler module for walking recommendation pages
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - Document parsing
//! - Frontier and visited-set bookkeeping
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{Coordinator, CrawlOutcome, CrawlStats};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use frontier::{Frontier, VisitedSet};
pub use parser::parse_document;

use crate::config::Config;
use crate::extract::CardAdapter;
use crate::output::{write_products, CrawlReport, FileSink};
use crate::ShelfError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and the card extractor from the configuration
/// 2. Walk the recommendation graph from the seed product
/// 3. Render every discovered product and write the output file
///
/// Nothing is written unless the whole crawl succeeds.
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `config_hash` - Hash of the configuration file, echoed in the report
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed and output written
/// * `Err(ShelfError)` - Crawl or output failed
///
/// # Example
///
/// ```no_run
/// use shelfwalk::config::load_config;
/// use shelfwalk::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("shelfwalk.toml"))?;
/// let report = run_crawl(&config, None).await?;
/// println!("{} products", report.unique_products);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    config: &Config,
    config_hash: Option<String>,
) -> Result<CrawlReport, ShelfError> {
    let started_at = chrono::Utc::now();

    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)?;
    let adapter = CardAdapter::from_config(config)?;

    tracing::info!("Starting crawl at {}", config.seed_url());
    let outcome = Coordinator::new(fetcher, adapter, &config.seed.product_id)
        .run()
        .await?;

    let mut sink = FileSink::new(&config.output.html_path);
    let written = write_products(&outcome.registry, &mut sink, config.output.escape_html)?;
    tracing::info!("Wrote {} products to {}", written, sink.path().display());

    Ok(CrawlReport::from_outcome(
        &outcome,
        started_at,
        config_hash,
        config.output.html_path.clone(),
    ))
}
