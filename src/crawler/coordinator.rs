//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop, which:
//! - Seeds the frontier with the seed product's recommendation URL
//! - Takes URLs off the frontier depth-first, skipping ones already visited
//! - Fetches, parses and extracts each page
//! - Merges extracted products into the registry and queues their
//!   recommendation URLs
//!
//! The loop is strictly sequential. Any fetch or parse error aborts the run.

use crate::catalog::ProductRegistry;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::crawler::parser::parse_document;
use crate::extract::SiteAdapter;
use crate::ShelfError;
use std::time::{Duration, Instant};

/// Counters collected during a crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched successfully
    pub pages_fetched: usize,

    /// Frontier entries discarded because their URL was already visited
    pub duplicates_skipped: usize,

    /// Products extracted across all pages, before deduplication by id
    pub products_extracted: usize,

    /// Product cards skipped because no id could be recovered
    pub cards_skipped: usize,
}

/// Result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Every product discovered, one per id
    pub registry: ProductRegistry,

    /// Counters collected during the crawl
    pub stats: CrawlStats,

    /// Wall-clock time spent crawling
    pub elapsed: Duration,
}

/// Main crawler coordinator structure
pub struct Coordinator<F, A> {
    fetcher: F,
    adapter: A,
    frontier: Frontier,
    visited: VisitedSet,
    registry: ProductRegistry,
    stats: CrawlStats,
}

impl<F: Fetcher, A: SiteAdapter> Coordinator<F, A> {
    /// Creates a coordinator for one crawl run
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Source of page bodies
    /// * `adapter` - Site-specific card extractor
    /// * `seed_product_id` - Product whose recommendation page is fetched first
    pub fn new(fetcher: F, adapter: A, seed_product_id: &str) -> Self {
        let seed_url = adapter.recommendation_url(seed_product_id);
        tracing::debug!("Seeding frontier with {}", seed_url);

        Self {
            fetcher,
            adapter,
            frontier: Frontier::with_seed(seed_url),
            visited: VisitedSet::new(),
            registry: ProductRegistry::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Runs the crawl loop until the frontier is empty
    ///
    /// Per iteration:
    /// 1. Look at the most recently pushed URL
    /// 2. Already visited: drop it without a network call
    /// 3. Otherwise pop it, mark it visited, fetch and parse it
    /// 4. Register extracted products and push their recommendation URLs
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - The frontier ran dry
    /// * `Err(ShelfError)` - A fetch or parse failed; nothing is returned
    pub async fn run(mut self) -> Result<CrawlOutcome, ShelfError> {
        let start_time = Instant::now();

        while let Some(next) = self.frontier.peek() {
            if self.visited.contains(next) {
                tracing::trace!("Skipping already visited {}", next);
                self.frontier.pop();
                self.stats.duplicates_skipped += 1;
                continue;
            }

            let Some(url) = self.frontier.pop() else {
                break;
            };
            self.visited.mark(&url);

            self.process_url(&url).await?;

            if self.stats.pages_fetched % 10 == 0 {
                let elapsed = start_time.elapsed();
                let rate = self.stats.pages_fetched as f64 / elapsed.as_secs_f64();
                tracing::info!(
                    "Progress: {} pages fetched, {} products, {} in frontier, {:.2} pages/sec",
                    self.stats.pages_fetched,
                    self.registry.len(),
                    self.frontier.len(),
                    rate
                );
            }
        }

        tracing::info!("Frontier is empty, crawl complete");

        let elapsed = start_time.elapsed();
        tracing::info!(
            "Crawl completed: {} pages fetched, {} unique products in {:?}",
            self.stats.pages_fetched,
            self.registry.len(),
            elapsed
        );

        Ok(CrawlOutcome {
            registry: self.registry,
            stats: self.stats,
            elapsed,
        })
    }

    /// Fetches one URL and folds its products into the crawl state
    async fn process_url(&mut self, url: &str) -> Result<(), ShelfError> {
        tracing::debug!("Fetching {}", url);
        let body = self.fetcher.fetch(url).await?;
        self.stats.pages_fetched += 1;

        let extraction = {
            let document = parse_document(&body, url)?;
            self.adapter.extract(&document)
        };

        for skipped in &extraction.skipped {
            tracing::warn!("Skipped product card on {}: {}", url, skipped);
        }
        self.stats.cards_skipped += extraction.skipped.len();
        self.stats.products_extracted += extraction.products.len();

        if extraction.is_empty() {
            tracing::debug!("No product cards on {}", url);
        } else {
            tracing::debug!(
                "{} yielded {} products and {} follow-ups",
                url,
                extraction.products.len(),
                extraction.follow_ups.len()
            );
        }

        for product in extraction.products {
            if !product.is_complete() {
                tracing::debug!("Product {} is missing some fields", product.id);
            }
            if let Some(previous) = self.registry.register(product) {
                tracing::trace!("Replaced earlier record for product {}", previous);
            }
        }

        self.frontier.extend(extraction.follow_ups);

        Ok(())
    }
}
