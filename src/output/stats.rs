//! Crawl report generation
//!
//! This module turns the counters of a finished crawl into a report and
//! prints it.

use crate::crawler::CrawlOutcome;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Summary of one finished crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the output file was written
    pub finished_at: DateTime<Utc>,

    /// Time spent in the crawl loop, excluding output
    pub crawl_elapsed: Duration,

    /// SHA-256 of the configuration file, if one was used
    pub config_hash: Option<String>,

    /// Recommendation pages fetched
    pub pages_fetched: usize,

    /// Frontier entries dropped because they were already visited
    pub duplicates_skipped: usize,

    /// Products extracted across all pages, before deduplication
    pub products_extracted: usize,

    /// Distinct products written
    pub unique_products: usize,

    /// Product cards skipped for lack of an id
    pub cards_skipped: usize,

    /// Where the rendered products were written
    pub output_path: String,
}

impl CrawlReport {
    /// Builds a report from a crawl outcome
    pub fn from_outcome(
        outcome: &CrawlOutcome,
        started_at: DateTime<Utc>,
        config_hash: Option<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            started_at,
            finished_at: Utc::now(),
            crawl_elapsed: outcome.elapsed,
            config_hash,
            pages_fetched: outcome.stats.pages_fetched,
            duplicates_skipped: outcome.stats.duplicates_skipped,
            products_extracted: outcome.stats.products_extracted,
            unique_products: outcome.registry.len(),
            cards_skipped: outcome.stats.cards_skipped,
            output_path: output_path.into(),
        }
    }

    /// Seconds between start and finish
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Prints the report to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Report ===\n");

    println!("Run:");
    println!("  Started: {}", report.started_at.to_rfc3339());
    println!("  Finished: {}", report.finished_at.to_rfc3339());
    println!("  Duration: {:.2}s", report.duration_seconds());
    println!("  Crawl time: {:.2}s", report.crawl_elapsed.as_secs_f64());
    if let Some(hash) = &report.config_hash {
        println!("  Config hash: {}", hash);
    }
    println!();

    println!("Crawl:");
    println!("  Pages fetched: {}", report.pages_fetched);
    println!("  Duplicate URLs skipped: {}", report.duplicates_skipped);
    println!();

    println!("Products:");
    println!("  Extracted (with repeats): {}", report.products_extracted);
    println!("  Unique: {}", report.unique_products);
    if report.cards_skipped > 0 {
        println!("  Cards skipped (no id): {}", report.cards_skipped);
    }
    println!();

    println!("Output: {}", report.output_path);
}
