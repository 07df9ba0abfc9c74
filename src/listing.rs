//! Listing-page parsing
//!
//! Pure extraction of detail-page links from the signature index markup.
//! Network-free: callers fetch the page and hand the HTML in, which keeps the
//! extraction independently testable against captured fixtures.

use crate::error::{Error, Result};
use crate::types::SignatureLink;
use regex::Regex;
use scraper::{Html, Selector};

/// Pattern a detail-page href must match to be considered at all
const DETAIL_LINK_PATTERN: &str = r"(?i)/security_response/attacksignatures/detail\.jsp\?asid=";

/// Pattern extracting the numeric signature ID from a matching href
const SIGNATURE_ID_PATTERN: &str =
    r"(?i)/security_response/attacksignatures/detail\.jsp\?asid=([0-9]{1,10})";

/// Extract all detail-page links from the listing page
///
/// Selects every anchor whose href matches the detail-page pattern
/// (case-insensitive) and extracts the 1-10 digit signature ID from its query
/// string, along with the anchor's display text. Links are returned in
/// document order, duplicates included.
///
/// # Errors
/// Returns [`Error::MalformedLink`] if an anchor matches the detail-page
/// pattern but its ID group does not: the index page always carries a numeric
/// `asid`, so a miss means the markup changed and silently skipping would
/// produce an incomplete lookup table.
pub fn parse_listing(html: &str) -> Result<Vec<SignatureLink>> {
    let document = Html::parse_document(html);
    let anchors =
        Selector::parse("a[href]").map_err(|e| Error::Parse(format!("anchor selector: {e}")))?;
    let link_pattern =
        Regex::new(DETAIL_LINK_PATTERN).map_err(|e| Error::Parse(format!("link pattern: {e}")))?;
    let id_pattern =
        Regex::new(SIGNATURE_ID_PATTERN).map_err(|e| Error::Parse(format!("id pattern: {e}")))?;

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !link_pattern.is_match(href) {
            continue;
        }

        let id = id_pattern
            .captures(href)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str().to_string())
            .ok_or_else(|| Error::MalformedLink {
                href: href.to_string(),
            })?;

        let label = anchor.text().next().unwrap_or_default().to_string();

        links.push(SignatureLink {
            id,
            label,
            href: href.to_string(),
        });
    }

    tracing::debug!(count = links.len(), "parsed listing page");
    Ok(links)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_matching_anchors_in_document_order() {
        let html = r#"
            <html><body>
              <a href="/security_response/attacksignatures/detail.jsp?asid=12345">Test Signature</a>
              <a href="/other/page.jsp">Unrelated</a>
              <a href="/security_response/attacksignatures/detail.jsp?asid=7">Another Sig</a>
            </body></html>
        "#;

        let links = parse_listing(html).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].id, "12345");
        assert_eq!(links[0].label, "Test Signature");
        assert_eq!(
            links[0].href,
            "/security_response/attacksignatures/detail.jsp?asid=12345"
        );
        assert_eq!(links[1].id, "7");
        assert_eq!(links[1].label, "Another Sig");
    }

    #[test]
    fn href_matching_is_case_insensitive() {
        let html = r#"<a href="/Security_Response/AttackSignatures/Detail.JSP?asid=42">Sig</a>"#;
        let links = parse_listing(html).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, "42");
    }

    #[test]
    fn duplicate_links_are_preserved() {
        let html = r#"
            <a href="/security_response/attacksignatures/detail.jsp?asid=99">First</a>
            <a href="/security_response/attacksignatures/detail.jsp?asid=99">Second</a>
        "#;
        let links = parse_listing(html).unwrap();
        assert_eq!(links.len(), 2, "no deduplication");
        assert_eq!(links[0].label, "First");
        assert_eq!(links[1].label, "Second");
    }

    #[test]
    fn page_without_matching_anchors_yields_empty_list() {
        let html = r#"<html><body><a href="/home">Home</a><p>No signatures here</p></body></html>"#;
        let links = parse_listing(html).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn anchor_count_equals_link_count() {
        let mut html = String::from("<html><body>");
        for i in 0..25 {
            html.push_str(&format!(
                r#"<a href="/security_response/attacksignatures/detail.jsp?asid={i}">Sig {i}</a>"#
            ));
        }
        html.push_str("</body></html>");

        let links = parse_listing(&html).unwrap();
        assert_eq!(links.len(), 25);
        for (i, link) in links.iter().enumerate() {
            assert_eq!(link.id, i.to_string());
        }
    }

    #[test]
    fn non_numeric_id_is_a_malformed_link() {
        let html = r#"<a href="/security_response/attacksignatures/detail.jsp?asid=abc">Bad</a>"#;
        let err = parse_listing(html).unwrap_err();
        match err {
            Error::MalformedLink { href } => {
                assert!(href.ends_with("asid=abc"));
            }
            other => panic!("expected MalformedLink, got {other:?}"),
        }
    }

    #[test]
    fn empty_id_is_a_malformed_link() {
        let html = r#"<a href="/security_response/attacksignatures/detail.jsp?asid=">Empty</a>"#;
        assert!(matches!(
            parse_listing(html),
            Err(Error::MalformedLink { .. })
        ));
    }

    #[test]
    fn id_is_capped_at_ten_digits() {
        // Eleven digits: the capture still matches its first ten, mirroring the
        // bounded quantifier in the extraction pattern
        let html =
            r#"<a href="/security_response/attacksignatures/detail.jsp?asid=12345678901">Long</a>"#;
        let links = parse_listing(html).unwrap();
        assert_eq!(links[0].id, "1234567890");
    }

    #[test]
    fn anchor_with_no_text_gets_empty_label() {
        let html = r#"<a href="/security_response/attacksignatures/detail.jsp?asid=5"></a>"#;
        let links = parse_listing(html).unwrap();
        assert_eq!(links[0].label, "");
    }
}
