use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Urgency classification of a bill. Drives the primary sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
    /// Anything outside the three defined levels. Never produced by a
    /// well-behaved upstream, but input with a stray value must not fail.
    #[serde(other)]
    Unknown,
}

impl Urgency {
    /// Sort rank: high before medium before low, unknown after everything.
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::High => 0,
            Urgency::Medium => 1,
            Urgency::Low => 2,
            Urgency::Unknown => 3,
        }
    }
}

impl From<&str> for Urgency {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "high" => Urgency::High,
            "medium" => Urgency::Medium,
            "low" => Urgency::Low,
            _ => Urgency::Unknown,
        }
    }
}

/// A single legislative bill record as supplied by the data-fetch layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    /// Opaque unique identifier within one input set
    pub id: String,
    /// Human-readable bill number, e.g. "SB1234"
    pub number: String,
    /// Short title
    pub title: String,
    /// Free-text summary, may be empty
    #[serde(default)]
    pub description: String,
    /// Priority classification
    pub urgency: Urgency,
    /// Raw date of the last recorded action, e.g. "2023-06-15".
    /// Kept as supplied; parsed on demand for sorting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action_date: Option<String>,
    /// Free-text status, e.g. "In committee"
    #[serde(default)]
    pub status: String,
}

impl BillRecord {
    /// Parse the last action date, accepting `YYYY-MM-DD` or RFC 3339.
    /// Returns `None` for a missing or unparseable value, which sorts as
    /// older than any valid date.
    pub fn action_date(&self) -> Option<NaiveDate> {
        let raw = self.last_action_date.as_deref()?;
        raw.parse::<NaiveDate>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}

/// One entry in the compact pager strip. The two ellipsis variants are
/// distinct so a renderer can key the leading and trailing gaps stably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageToken {
    Page(usize),
    LeadingEllipsis,
    TrailingEllipsis,
}

/// One page of the filtered, sorted record set plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// At most `page_size` records in display order
    pub items: Vec<BillRecord>,
    /// Size of the whole filtered set, across all pages
    pub total_filtered: usize,
    /// Number of pages in the filtered set; 0 when it is empty
    pub total_pages: usize,
    /// Tokens for rendering a compact pager
    pub page_numbers: Vec<PageToken>,
}
