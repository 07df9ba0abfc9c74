//! Detail-page severity extraction
//!
//! Pure extraction of the severity rating from a signature detail page.
//! Network-free, like [`crate::listing`].

use regex::Regex;
use scraper::{Html, Selector};

/// Severity written when the detail page carries no recognizable rating
pub const UNKNOWN_SEVERITY: &str = "unknown";

/// Pattern matching the severity rating inside a level-3 heading
const SEVERITY_PATTERN: &str = r"(?i)severity:\s([a-z].*)";

/// Extract the severity rating from a detail page
///
/// Scans every `<h3>` heading's text for a `Severity: <rating>`
/// (case-insensitive); the rating is lowercased and trimmed. When several
/// headings carry one, the last in document order wins. Pages without one
/// yield [`UNKNOWN_SEVERITY`]; a missing rating is ordinary page variation,
/// not an error.
pub fn parse_severity(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut severity = UNKNOWN_SEVERITY.to_string();

    let (Ok(headings), Ok(pattern)) = (Selector::parse("h3"), Regex::new(SEVERITY_PATTERN)) else {
        return severity;
    };

    for heading in document.select(&headings) {
        let text: String = heading.text().collect();
        if let Some(rating) = pattern.captures(&text).and_then(|c| c.get(1)) {
            severity = rating.as_str().trim().to_lowercase();
        }
    }

    severity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_severity_from_heading() {
        let html = "<html><body><h3>Severity: Medium</h3></body></html>";
        assert_eq!(parse_severity(html), "medium");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(parse_severity("<h3>SEVERITY: HIGH</h3>"), "high");
        assert_eq!(parse_severity("<h3>severity: low</h3>"), "low");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let html = "<h3>Severity: High   </h3>";
        assert_eq!(parse_severity(html), "high");
    }

    #[test]
    fn page_without_severity_heading_is_unknown() {
        let html = "<html><body><h3>Description</h3><p>Severity: High</p></body></html>";
        assert_eq!(
            parse_severity(html),
            UNKNOWN_SEVERITY,
            "severity outside an h3 does not count"
        );
    }

    #[test]
    fn empty_page_is_unknown() {
        assert_eq!(parse_severity(""), UNKNOWN_SEVERITY);
    }

    #[test]
    fn last_matching_heading_wins() {
        let html = "<h3>Severity: Low</h3><h3>Severity: Critical</h3>";
        assert_eq!(parse_severity(html), "critical");
    }

    #[test]
    fn non_matching_later_heading_does_not_reset_result() {
        let html = "<h3>Severity: Medium</h3><h3>References</h3>";
        assert_eq!(parse_severity(html), "medium");
    }

    #[test]
    fn multi_word_rating_is_preserved() {
        let html = "<h3>Severity: Very High</h3>";
        assert_eq!(parse_severity(html), "very high");
    }

    #[test]
    fn rating_inside_nested_markup_is_found() {
        let html = "<h3><span>Severity:</span> <b>High</b></h3>";
        assert_eq!(parse_severity(html), "high");
    }
}
