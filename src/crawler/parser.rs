//! HTML parser for extracting anchors
//!
//! This module turns page content into the ordered list of `(href, text)`
//! pairs the link classifier consumes.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// One link on a page: its raw href and its visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// The href attribute as written in the markup (not resolved)
    pub href: String,

    /// Concatenated descendant text of the anchor, trimmed
    pub text: String,
}

/// Extracts every `<a href>` element from the HTML, in document order
///
/// Anchors are returned unfiltered; deciding which ones matter is the
/// classifier's job. Malformed markup never fails: the HTML parser recovers
/// the same way browsers do.
///
/// # Example
///
/// ```
/// use earnings_scout::crawler::extract_anchors;
///
/// let html = r#"<a href="/q1.mp3"> Q1 <b>Call</b> </a>"#;
/// let anchors = extract_anchors(html);
/// assert_eq!(anchors[0].href, "/q1.mp3");
/// assert_eq!(anchors[0].text, "Q1 Call");
/// ```
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            Some(Anchor {
                href: href.to_string(),
                text: element.text().collect::<String>().trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_anchor() {
        let html = r#"<html><body><a href="/events/q2">Q2 Earnings Call</a></body></html>"#;
        let anchors = extract_anchors(html);
        assert_eq!(
            anchors,
            vec![Anchor {
                href: "/events/q2".to_string(),
                text: "Q2 Earnings Call".to_string(),
            }]
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <html><body>
                <nav><a href="/first">First</a></nav>
                <main><a href="/second">Second</a></main>
                <footer><a href="/third">Third</a></footer>
            </body></html>
        "#;
        let hrefs: Vec<String> = extract_anchors(html).into_iter().map(|a| a.href).collect();
        assert_eq!(hrefs, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_nested_text_is_concatenated_and_trimmed() {
        let html = r#"<a href="/x">
            <span>Q3 2024</span> Conference Call
        </a>"#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors[0].text, "Q3 2024 Conference Call");
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Top</a><a href="">Empty</a>"#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "");
        assert_eq!(anchors[0].text, "Empty");
    }

    #[test]
    fn test_href_is_not_resolved() {
        let html = r#"<a href="../media/q1.mp3">Audio</a>"#;
        assert_eq!(extract_anchors(html)[0].href, "../media/q1.mp3");
    }

    #[test]
    fn test_malformed_html_still_parses() {
        let html = r#"<div><a href="/q4">Q4 Webcast<p>unclosed"#;
        let anchors = extract_anchors(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "/q4");
    }

    #[test]
    fn test_no_anchors() {
        assert!(extract_anchors("<html><body><p>Nothing here</p></body></html>").is_empty());
        assert!(extract_anchors("").is_empty());
    }
}
