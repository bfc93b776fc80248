//! URL handling module for Earnings Scout
//!
//! This module provides seed URL validation, site-root candidate building
//! and href resolution against the page an anchor was found on.

mod domain;
mod resolve;

pub use domain::{parse_http_url, site_url};
pub use resolve::resolve_href;
