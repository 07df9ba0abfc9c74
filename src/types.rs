//! Core record types

use serde::{Deserialize, Serialize};

/// A detail-page link discovered on the listing page
///
/// One `SignatureLink` is produced per matching anchor, in document order.
/// Duplicate anchors yield duplicate links; no deduplication is performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureLink {
    /// Numeric signature identifier extracted from the link's query string
    pub id: String,

    /// Display text of the anchor (its first text node)
    pub label: String,

    /// The href attribute as it appeared on the page, relative to the origin
    pub href: String,
}

/// A fully resolved signature record, one CSV row
///
/// Created from a [`SignatureLink`] once its detail page has been fetched and
/// the severity extracted. Written to the output immediately and not retained.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    /// Numeric signature identifier
    #[serde(rename = "SignatureID")]
    pub id: String,

    /// Severity rating, lowercased and trimmed, or "unknown" if the detail
    /// page carried none
    #[serde(rename = "severity")]
    pub severity: String,

    /// Signature display name from the listing page
    #[serde(rename = "SignatureStr")]
    pub label: String,

    /// Fully qualified URL of the detail page
    #[serde(rename = "signature_detail_url")]
    pub detail_url: String,
}
