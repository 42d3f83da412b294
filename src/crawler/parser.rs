//! HTML document parsing for fetched recommendation pages
//!
//! Bodies arrive as raw bytes. They must be valid UTF-8; anything else is a
//! parse error and ends the crawl. html5ever itself recovers from malformed
//! markup, so its own complaints are only logged.

use crate::ShelfError;
use scraper::Html;

/// Parses a fetched body into a document tree
///
/// # Arguments
///
/// * `body` - Raw response body
/// * `url` - The URL the body came from (for error reporting)
///
/// # Returns
///
/// * `Ok(Html)` - The parsed document
/// * `Err(ShelfError::HtmlParse)` - The body is not valid UTF-8
///
/// # Example
///
/// ```
/// use shelfwalk::crawler::parse_document;
///
/// let html = b"<html><body><div class=\"box product\"></div></body></html>";
/// let document = parse_document(html, "https://shop.test/rec?product_id=1").unwrap();
/// assert!(document.root_element().value().name() == "html");
/// ```
pub fn parse_document(body: &[u8], url: &str) -> Result<Html, ShelfError> {
    let text = std::str::from_utf8(body).map_err(|e| ShelfError::HtmlParse {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(text);

    if !document.errors.is_empty() {
        tracing::trace!(
            "Recovered from {} markup errors in {}",
            document.errors.len(),
            url
        );
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_parse_valid_document() {
        let document =
            parse_document(b"<html><head><title>Recs</title></head></html>", "u").unwrap();
        let title = Selector::parse("title").unwrap();
        assert_eq!(document.select(&title).count(), 1);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_document(b"", "u").is_ok());
    }

    #[test]
    fn test_parse_recovers_from_broken_markup() {
        let document = parse_document(b"<div class=\"box product\"><span>unclosed", "u").unwrap();
        let span = Selector::parse("div span").unwrap();
        assert_eq!(document.select(&span).count(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let result = parse_document(&[0x3c, 0x70, 0x3e, 0xff, 0xfe], "https://shop.test/x");
        match result {
            Err(ShelfError::HtmlParse { url, .. }) => assert_eq!(url, "https://shop.test/x"),
            other => panic!("expected HtmlParse error, got {:?}", other.map(|_| ())),
        }
    }
}
