//! HTML fragment rendering for products
//!
//! Every product becomes one fixed-shape `<div class="product">` block.

use crate::catalog::Product;
use std::borrow::Cow;

/// Renders one product as an HTML fragment
///
/// `title` appears twice: as image alt text and as the heading. Fields are
/// inserted verbatim unless `escape` is set, in which case they are
/// HTML-escaped.
///
/// # Example
///
/// ```
/// use shelfwalk::output::render_product;
/// use shelfwalk::Product;
///
/// let product = Product {
///     id: "2".to_string(),
///     title: "Widget".to_string(),
///     price: "$5.00".to_string(),
///     link: "https://site/p/2".to_string(),
///     image: "https://img/2.jpg".to_string(),
/// };
/// let html = render_product(&product, false);
/// assert!(html.contains("<h2>Widget</h2>"));
/// ```
pub fn render_product(product: &Product, escape: bool) -> String {
    let field = |value: &str| -> String {
        if escape {
            escape_html(value).into_owned()
        } else {
            value.to_string()
        }
    };

    format!(
        "<div class=\"product\">\n\
         \t<a href=\"{link}\">\n\
         \t\t<img src=\"{image}\" alt=\"{title}\"/>\n\
         \t</a>\n\
         \t<h2>{title}</h2>\n\
         \t<p class=\"price\">{price}</p>\n\
         </div>",
        link = field(&product.link),
        image = field(&product.image),
        title = field(&product.title),
        price = field(&product.price),
    )
}

/// Escapes text for use in HTML content and double- or single-quoted attributes
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
