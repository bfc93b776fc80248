//! Link classification for earnings-call assets
//!
//! This module holds the heuristic that turns one anchor into an
//! [`EarningsCallRecord`](crate::record::EarningsCallRecord):
//! - Keyword filtering of the anchor text
//! - Quarter and year extraction
//! - Call-type detection from the href and text
//!
//! The signal tables live in [`rules`] so they can be inspected and tested
//! independently of the classifier.

mod classifier;
pub mod rules;

pub use classifier::{classify_anchors, classify_link};
pub use rules::{CallTypeRule, SignalSource, CALL_TYPE_RULES, EARNINGS_KEYWORDS};
