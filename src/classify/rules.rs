//! Signal tables for the link classifier
//!
//! The tables are ordered and evaluated front to back. Keeping them as data
//! lets tests walk every entry.

use crate::record::CallType;

/// Lower-case substrings that mark anchor text as earnings-related
pub const EARNINGS_KEYWORDS: &[&str] = &[
    "earnings call",
    "quarterly results",
    "q1",
    "q2",
    "q3",
    "q4",
    "conference call",
    "webcast",
    "financial results",
    "investor call",
];

/// Which part of the anchor a call-type rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    /// The lower-cased href as written in the markup
    Href,
    /// The lower-cased anchor text
    Text,
}

/// One call-type rule: any needle found in the source selects `call_type`
#[derive(Debug, Clone, Copy)]
pub struct CallTypeRule {
    pub source: SignalSource,
    pub needles: &'static [&'static str],
    pub call_type: CallType,
}

impl CallTypeRule {
    /// Returns true if any needle occurs in the matching input
    pub fn matches(&self, href_lower: &str, text_lower: &str) -> bool {
        let haystack = match self.source {
            SignalSource::Href => href_lower,
            SignalSource::Text => text_lower,
        };
        self.needles.iter().any(|needle| haystack.contains(needle))
    }
}

/// Call-type rules in priority order; first match wins
///
/// File-extension rules precede the transcript keyword, so a media file
/// labelled "Transcript" is still audio or video.
pub const CALL_TYPE_RULES: &[CallTypeRule] = &[
    CallTypeRule {
        source: SignalSource::Href,
        needles: &[".mp3", ".wav", ".m4a"],
        call_type: CallType::Audio,
    },
    CallTypeRule {
        source: SignalSource::Href,
        needles: &[".mp4", ".webm"],
        call_type: CallType::Video,
    },
    CallTypeRule {
        source: SignalSource::Text,
        needles: &["transcript"],
        call_type: CallType::Transcript,
    },
];

/// Returns true if the lower-cased text carries any earnings keyword
pub fn has_earnings_keyword(text_lower: &str) -> bool {
    EARNINGS_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}

/// Picks the call type from the rule table, falling back to webcast
pub fn detect_call_type(href_lower: &str, text_lower: &str) -> CallType {
    CALL_TYPE_RULES
        .iter()
        .find(|rule| rule.matches(href_lower, text_lower))
        .map(|rule| rule.call_type)
        .unwrap_or_default()
}
