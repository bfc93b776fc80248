use url::Url;

/// Resolves an anchor href against the page it was found on
///
/// Relative hrefs inherit scheme and host from `page_url`; absolute hrefs are
/// returned as parsed. An href the URL parser rejects outright is returned
/// verbatim (trimmed) so classification never fails on odd markup.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use earnings_scout::url::resolve_href;
///
/// let page = Url::parse("https://ir.tesla.com/events/").unwrap();
/// assert_eq!(resolve_href("q3.mp3", &page), "https://ir.tesla.com/events/q3.mp3");
/// assert_eq!(resolve_href("/q3.mp3", &page), "https://ir.tesla.com/q3.mp3");
/// ```
pub fn resolve_href(href: &str, page_url: &Url) -> String {
    let href = href.trim();
    match page_url.join(href) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => href.to_string(),
    }
}
