/// Product record definitions
///
/// A product is everything one product card on a recommendation page tells us.
use std::fmt;

/// Placeholder substituted by the product id in recommendation URL templates
pub const ID_PLACEHOLDER: &str = "{id}";

/// Builds a recommendation endpoint URL for a product id
///
/// Every `{id}` occurrence in `template` is replaced by `product_id`.
///
/// # Example
///
/// ```
/// use shelfwalk::catalog::recommendation_url;
///
/// let url = recommendation_url("https://shop.test/recommendations?product_id={id}", "42");
/// assert_eq!(url, "https://shop.test/recommendations?product_id=42");
/// ```
pub fn recommendation_url(template: &str, product_id: &str) -> String {
    template.replace(ID_PLACEHOLDER, product_id)
}

/// One product discovered on a recommendation page
///
/// Only `id` is guaranteed to be non-empty. The other fields are best-effort
/// captures and stay empty when the card does not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    /// Numeric product identifier captured from the card anchor
    pub id: String,

    /// Product title (image alt text)
    pub title: String,

    /// Display price, trimmed but otherwise untouched
    pub price: String,

    /// Absolute URL of the product detail page
    pub link: String,

    /// Absolute URL of a representative image
    pub image: String,
}

impl Product {
    /// Creates a product with only an id set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns true if every optional field was captured
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.price.is_empty()
            && !self.link.is_empty()
            && !self.image.is_empty()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "#{}", self.id)
        } else {
            write!(f, "#{} ({})", self.id, self.title)
        }
    }
}
