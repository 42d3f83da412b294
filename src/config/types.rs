use crate::catalog::recommendation_url;
use serde::Deserialize;

/// Main configuration structure for Shelfwalk
///
/// Every section has defaults, so an empty file (or no file at all) crawls
/// the arbysshop.com recommendation chain starting at product 4434084855901.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub markup: SiteProfile,
}

impl Config {
    /// The recommendation endpoint URL of the seed product
    pub fn seed_url(&self) -> String {
        recommendation_url(&self.site.recommendation_url_template, &self.seed.product_id)
    }
}

/// Where the crawl starts
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Product id whose recommendation page is fetched first
    #[serde(rename = "product-id")]
    pub product_id: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            product_id: "4434084855901".to_string(),
        }
    }
}

/// Site addressing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host prepended to relative product links
    pub origin: String,

    /// Recommendation endpoint with an `{id}` placeholder
    #[serde(rename = "recommendation-url-template")]
    pub recommendation_url_template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://arbysshop.com".to_string(),
            recommendation_url_template: "https://arbysshop.com/recommendations/products\
                ?&section_id=product-recommendations&product_id={id}"
                .to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "shelfwalk".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/shelfwalk".to_string(),
            contact_email: "crawler@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the rendered HTML file
    #[serde(rename = "html-path")]
    pub html_path: String,

    /// HTML-escape product fields when rendering (off: fields are verbatim)
    #[serde(rename = "escape-html")]
    pub escape_html: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html_path: "index.html".to_string(),
            escape_html: false,
        }
    }
}

/// Markup assumptions about product cards on recommendation pages
///
/// Everything the extractor knows about the shop's HTML lives here, so a
/// theme change on the site only needs a config change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Tag of the product card container
    #[serde(rename = "container-tag")]
    pub container_tag: String,

    /// Class tokens the container must all carry
    #[serde(rename = "container-classes")]
    pub container_classes: Vec<String>,

    /// Tag of the card link that carries the product id
    #[serde(rename = "anchor-tag")]
    pub anchor_tag: String,

    /// Class token of the card link
    #[serde(rename = "anchor-class")]
    pub anchor_class: String,

    /// Attribute of the card link holding the id
    #[serde(rename = "id-attribute")]
    pub id_attribute: String,

    /// Literal text preceding the numeric id in that attribute
    #[serde(rename = "id-prefix")]
    pub id_prefix: String,

    /// Tag of the price element
    #[serde(rename = "price-tag")]
    pub price_tag: String,

    /// Class token of the price element
    #[serde(rename = "price-class")]
    pub price_class: String,

    /// Tag of the product image
    #[serde(rename = "image-tag")]
    pub image_tag: String,

    /// Class token of the product image
    #[serde(rename = "image-class")]
    pub image_class: String,

    /// Attribute holding the protocol-relative image URL
    #[serde(rename = "image-fallback-attribute")]
    pub image_fallback_attribute: String,

    /// Scheme prepended to the fallback image URL
    #[serde(rename = "image-scheme")]
    pub image_scheme: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            container_classes: vec!["box".to_string(), "product".to_string()],
            anchor_tag: "a".to_string(),
            anchor_class: "product_card".to_string(),
            id_attribute: "id".to_string(),
            id_prefix: "ProductGridImageWrapper-product-recommendations--".to_string(),
            price_tag: "span".to_string(),
            price_class: "price".to_string(),
            image_tag: "img".to_string(),
            image_class: "product_card__image".to_string(),
            image_fallback_attribute: "data-fallback".to_string(),
            image_scheme: "https:".to_string(),
        }
    }
}
