//! Structural matching helpers for the card extractor
//!
//! Whole-token class matching, recursive text content and the id capture
//! pattern. These are kept free of any site knowledge.

use regex::Regex;
use scraper::{ElementRef, Node};

/// Returns true if `token` is one of the whitespace-separated words of `class_attr`
///
/// Substrings never match: `"product_card_highlighted"` does not carry the
/// `product_card` token.
///
/// # Examples
///
/// ```
/// use shelfwalk::extract::has_class_token;
///
/// assert!(has_class_token("product_card highlighted", "product_card"));
/// assert!(!has_class_token("product_card_highlighted", "product_card"));
/// ```
pub fn has_class_token(class_attr: &str, token: &str) -> bool {
    class_attr.split_whitespace().any(|class| class == token)
}

/// Returns true if the element's class attribute carries `token`
pub fn has_class(element: &ElementRef<'_>, token: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|classes| has_class_token(classes, token))
        .unwrap_or(false)
}

/// Returns true if the element has the given tag name
///
/// HTML tag names are case-insensitive; the parser already lowercases them.
pub fn is_tag(element: &ElementRef<'_>, tag: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(tag)
}

/// Recursive text content of an element
///
/// - text node: its own text, trimmed
/// - element: the trimmed concatenation of its children's text content in
///   document order
/// - anything else (comments, processing instructions): empty
///
/// Every level trims, so whitespace between child nodes does not survive.
pub fn text_content(element: ElementRef<'_>) -> String {
    let joined: String = element
        .children()
        .map(|child| match child.value() {
            Node::Text(text) => text.trim().to_string(),
            Node::Element(_) => ElementRef::wrap(child)
                .map(text_content)
                .unwrap_or_default(),
            _ => String::new(),
        })
        .collect();
    joined.trim().to_string()
}

/// Captures a numeric id that follows a literal prefix
///
/// The pattern is unanchored: the prefix may appear anywhere in the value,
/// and the run of ASCII digits right after it is the id.
#[derive(Debug, Clone)]
pub struct IdPattern {
    regex: Regex,
}

impl IdPattern {
    /// Compiles the capture pattern for `prefix`
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("{}([0-9]+)", regex::escape(prefix)))?;
        Ok(Self { regex })
    }

    /// Returns the digit run following the prefix, if any
    pub fn capture<'v>(&self, value: &'v str) -> Option<&'v str> {
        self.regex
            .captures(value)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
