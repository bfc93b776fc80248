use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a URL and checks that it is an absolute http(s) URL with a host
///
/// # Examples
///
/// ```
/// use earnings_scout::url::parse_http_url;
///
/// assert!(parse_http_url("https://ir.tesla.com/").is_ok());
/// assert!(parse_http_url("ftp://ir.tesla.com/").is_err());
/// ```
pub fn parse_http_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}

/// Builds `scheme://host[:port]<path>` from a URL on the same site
///
/// Query and fragment of the original URL are dropped.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use earnings_scout::url::site_url;
///
/// let seed = Url::parse("https://ir.tesla.com/corporate/default.aspx?x=1").unwrap();
/// let events = site_url(&seed, "/events").unwrap();
/// assert_eq!(events.as_str(), "https://ir.tesla.com/events");
/// ```
pub fn site_url(url: &Url, path: &str) -> UrlResult<Url> {
    let host = url.host_str().ok_or(UrlError::MissingDomain)?;
    let mut root = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        root.push_str(&format!(":{}", port));
    }

    Url::parse(&root)
        .and_then(|root| root.join(path))
        .map_err(|e| UrlError::Parse(e.to_string()))
}
