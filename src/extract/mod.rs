//! Extraction of product cards from recommendation pages
//!
//! This module turns a parsed HTML document into:
//! - Product records, one per recognised product card
//! - Follow-up URLs, the recommendation endpoint of every extracted product
//! - Diagnostics for cards that had to be skipped
//!
//! All knowledge about the shop's markup sits behind the [`SiteAdapter`]
//! trait so the crawl loop never touches tag names or class tokens.

mod cards;
mod matcher;

pub use cards::CardAdapter;
pub use matcher::{has_class, has_class_token, is_tag, text_content, IdPattern};

use crate::catalog::Product;
use scraper::Html;
use thiserror::Error;

/// Reasons a single product card could not be turned into a product
///
/// These never abort a crawl; the card is skipped and the walk continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("product card has no id-bearing link")]
    MissingAnchor,

    #[error("product card id attribute '{value}' does not match the id pattern")]
    UnrecognizedId { value: String },
}

/// Everything extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    /// Products in document order
    pub products: Vec<Product>,

    /// Recommendation URLs of those products, in the same order
    pub follow_ups: Vec<String>,

    /// Cards that were recognised but yielded no id
    pub skipped: Vec<ExtractError>,
}

impl PageExtraction {
    /// Returns true if the page produced neither products nor follow-ups
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.follow_ups.is_empty()
    }
}

/// Site-specific extraction strategy
///
/// Implementations own every structural assumption about the site's markup
/// and the shape of its recommendation endpoint.
pub trait SiteAdapter {
    /// Extracts product cards and follow-up URLs from a parsed document
    fn extract(&self, document: &Html) -> PageExtraction;

    /// Builds the recommendation endpoint URL for a product id
    fn recommendation_url(&self, product_id: &str) -> String;
}
