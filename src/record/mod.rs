//! The earnings-call record and its attribute types
//!
//! A record is built by the link classifier from one anchor on one page and
//! stored keyed by its resolved URL.

mod kinds;

pub use kinds::{CallType, Quarter};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A discovered earnings-call asset
///
/// Field order is the export order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsCallRecord {
    /// Exchange ticker of the company (e.g. "AAPL")
    pub ticker: String,

    /// Company display name
    pub company: String,

    /// Anchor text the link was found under
    pub title: String,

    /// Absolute URL of the asset; unique across the store
    pub url: String,

    pub call_type: CallType,

    pub quarter: Quarter,

    /// Fiscal year named in the title, or the classification year
    pub year: i32,

    /// Absolute URL of the page the anchor was found on
    pub found_on_page: String,

    /// When the link was classified
    pub discovered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_field_order() {
        let record = EarningsCallRecord {
            ticker: "AAPL".to_string(),
            company: "Apple Inc.".to_string(),
            title: "Q1 2024 Earnings Call".to_string(),
            url: "https://investor.apple.com/q1.mp3".to_string(),
            call_type: CallType::Audio,
            quarter: Quarter::Q1,
            year: 2024,
            found_on_page: "https://investor.apple.com/".to_string(),
            discovered_at: Utc.with_ymd_and_hms(2024, 2, 1, 22, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let keys = [
            "\"ticker\"",
            "\"company\"",
            "\"title\"",
            "\"url\"",
            "\"call_type\"",
            "\"quarter\"",
            "\"year\"",
            "\"found_on_page\"",
            "\"discovered_at\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
        assert!(json.contains("\"call_type\":\"audio\""));
        assert!(json.contains("\"discovered_at\":\"2024-02-01T22:00:00Z\""));
    }
}
