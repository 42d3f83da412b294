//! Product card extractor driven by a [`SiteProfile`]
//!
//! A product card is an element with the container tag carrying every
//! container class token. Inside a card:
//! - the card link gives the product link and, through the id pattern, the id
//! - the price element gives the display price
//! - the product image (with a non-empty fallback attribute) gives the image
//!   URL and the title
//!
//! A card without a recoverable id is skipped. A card with an id is always
//! kept, however incomplete the rest of it is.

use crate::catalog::{recommendation_url, Product};
use crate::config::{Config, SiteProfile};
use crate::extract::matcher::{has_class, is_tag, text_content, IdPattern};
use crate::extract::{ExtractError, PageExtraction, SiteAdapter};
use crate::ConfigError;
use scraper::{ElementRef, Html};

/// Extracts product cards using configurable markup assumptions
#[derive(Debug, Clone)]
pub struct CardAdapter {
    profile: SiteProfile,
    origin: String,
    template: String,
    id_pattern: IdPattern,
}

impl CardAdapter {
    /// Creates an adapter
    ///
    /// # Arguments
    ///
    /// * `profile` - Markup assumptions about product cards
    /// * `origin` - Scheme and host prepended to card link hrefs
    /// * `template` - Recommendation endpoint with an `{id}` placeholder
    ///
    /// # Returns
    ///
    /// * `Ok(CardAdapter)` - Ready to extract
    /// * `Err(ConfigError)` - The id prefix did not compile into a pattern
    pub fn new(
        profile: SiteProfile,
        origin: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let id_pattern = IdPattern::new(&profile.id_prefix)?;

        Ok(Self {
            profile,
            origin: origin.into(),
            template: template.into(),
            id_pattern,
        })
    }

    /// Creates an adapter from the `[site]` and `[markup]` configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(
            config.markup.clone(),
            config.site.origin.clone(),
            config.site.recommendation_url_template.clone(),
        )
    }

    /// The markup profile this adapter matches against
    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    /// Returns true if the element is a product card boundary
    fn is_card(&self, element: &ElementRef<'_>) -> bool {
        is_tag(element, &self.profile.container_tag)
            && self
                .profile
                .container_classes
                .iter()
                .all(|class| has_class(element, class))
    }

    /// Builds one product from the descendants of a card
    fn extract_card(&self, card: ElementRef<'_>) -> Result<Product, ExtractError> {
        let profile = &self.profile;
        let mut product = Product::default();
        let mut id = Err(ExtractError::MissingAnchor);

        // skip(1): descendants() starts with the card itself
        for node in card.descendants().skip(1) {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            let attrs = element.value();

            if is_part(&element, &profile.anchor_tag, &profile.anchor_class) {
                let href = attrs.attr("href").unwrap_or("");
                product.link = format!("{}{}", self.origin, href);

                let raw_id = attrs.attr(&profile.id_attribute).unwrap_or("");
                id = self
                    .id_pattern
                    .capture(raw_id)
                    .map(str::to_string)
                    .ok_or_else(|| ExtractError::UnrecognizedId {
                        value: raw_id.to_string(),
                    });
            }

            if is_part(&element, &profile.price_tag, &profile.price_class) {
                product.price = text_content(element);
            }

            if is_part(&element, &profile.image_tag, &profile.image_class) {
                if let Some(fallback) = attrs
                    .attr(&profile.image_fallback_attribute)
                    .filter(|value| !value.is_empty())
                {
                    product.image = format!("{}{}", profile.image_scheme, fallback);
                    product.title = attrs.attr("alt").unwrap_or("").to_string();
                }
            }
        }

        product.id = id?;
        Ok(product)
    }
}

/// Returns true if the element has the tag and carries the class token
fn is_part(element: &ElementRef<'_>, tag: &str, class: &str) -> bool {
    is_tag(element, tag) && has_class(element, class)
}

impl SiteAdapter for CardAdapter {
    fn extract(&self, document: &Html) -> PageExtraction {
        let mut extraction = PageExtraction::default();

        for node in document.tree.root().descendants() {
            let Some(element) = ElementRef::wrap(node) else {
                continue;
            };
            if !self.is_card(&element) {
                continue;
            }

            match self.extract_card(element) {
                Ok(product) => {
                    extraction
                        .follow_ups
                        .push(self.recommendation_url(&product.id));
                    extraction.products.push(product);
                }
                Err(e) => extraction.skipped.push(e),
            }
        }

        extraction
    }

    fn recommendation_url(&self, product_id: &str) -> String {
        recommendation_url(&self.template, product_id)
    }
}
