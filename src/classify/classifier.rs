use crate::classify::rules::{detect_call_type, has_earnings_keyword};
use crate::crawler::Anchor;
use crate::record::{EarningsCallRecord, Quarter};
use crate::url::resolve_href;
use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// Quarter is matched on lower-cased text, the year on the text as written.
static QUARTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"q([1-4])").expect("valid quarter pattern"));
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"20[0-9]{2}").expect("valid year pattern"));

/// Decides whether an anchor is an earnings-call asset and builds its record
///
/// # Classification Rules
///
/// 1. The lower-cased anchor text must contain an earnings keyword,
///    otherwise the anchor is rejected
/// 2. Quarter: first `q1`..`q4` in the lower-cased text, else `Unknown`
/// 3. Year: first `20dd` token in the text, else the year of `now`
/// 4. Call type: first matching rule of the call-type table, else webcast
/// 5. The href is resolved against `page_url`
///
/// The result depends only on the arguments, so a fixed `now` gives a
/// fixed answer.
///
/// # Arguments
///
/// * `anchor` - The href and visible text of the link
/// * `page_url` - The page the link was found on
/// * `ticker` - Ticker of the company being crawled
/// * `company` - Display name of the company being crawled
/// * `now` - The classification instant
///
/// # Returns
///
/// * `Some(EarningsCallRecord)` - The anchor looks like an earnings call
/// * `None` - No earnings keyword in the anchor text
pub fn classify_link(
    anchor: &Anchor,
    page_url: &Url,
    ticker: &str,
    company: &str,
    now: DateTime<Utc>,
) -> Option<EarningsCallRecord> {
    let text_lower = anchor.text.to_lowercase();

    if !has_earnings_keyword(&text_lower) {
        return None;
    }

    let quarter = QUARTER_RE
        .captures(&text_lower)
        .and_then(|caps| caps.get(1))
        .and_then(|digit| digit.as_str().chars().next())
        .map(Quarter::from_digit)
        .unwrap_or(Quarter::Unknown);

    let year = YEAR_RE
        .find(&anchor.text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or_else(|| now.year());

    let call_type = detect_call_type(&anchor.href.to_lowercase(), &text_lower);

    Some(EarningsCallRecord {
        ticker: ticker.to_string(),
        company: company.to_string(),
        title: anchor.text.clone(),
        url: resolve_href(&anchor.href, page_url),
        call_type,
        quarter,
        year,
        found_on_page: page_url.to_string(),
        discovered_at: now,
    })
}

/// Classifies every anchor found on one page, keeping document order
pub fn classify_anchors(
    anchors: &[Anchor],
    page_url: &Url,
    ticker: &str,
    company: &str,
    now: DateTime<Utc>,
) -> Vec<EarningsCallRecord> {
    anchors
        .iter()
        .filter_map(|anchor| classify_link(anchor, page_url, ticker, company, now))
        .collect()
}
