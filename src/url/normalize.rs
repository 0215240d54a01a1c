use url::Url;

/// Normalizes a URL into its canonical crawl form
///
/// # Normalization Steps
///
/// 1. Parse the URL (best-effort: unparseable input is still normalized)
/// 2. Remove fragment (everything after #) and an empty query (a bare `?`)
/// 3. Remove trailing slashes from the path, except for the root path `/`
///
/// Parsing goes through the `url` crate, so the host is lowercased and dot
/// segments are resolved on the way. Input that does not parse is cut at the
/// first `#` and trimmed of trailing slashes beyond the `scheme://` part; such
/// URLs are kept as-is and simply fail later at fetch time.
///
/// The output is the sole equality key for crawl nodes, and normalizing is
/// idempotent.
///
/// # Examples
///
/// ```
/// use docs_harvest::url::normalize_url;
///
/// assert_eq!(normalize_url("https://x.com/a/#frag"), "https://x.com/a");
/// assert_eq!(normalize_url("https://x.com/"), "https://x.com/");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    match Url::parse(url_str) {
        Ok(url) => normalize_parsed(url),
        Err(_) => normalize_raw(url_str),
    }
}

fn normalize_parsed(mut url: Url) -> String {
    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }

    // A query means the serialized form does not end with the path
    if !url.cannot_be_a_base() && url.query().is_none() {
        let path = url.path();
        if path.len() > 1 && path.ends_with('/') {
            let trimmed = path.trim_end_matches('/');
            let trimmed = if trimmed.is_empty() { "/" } else { trimmed }.to_string();
            url.set_path(&trimmed);
        }
    }

    url.to_string()
}

fn normalize_raw(url_str: &str) -> String {
    let without_fragment = match url_str.split_once('#') {
        Some((head, _)) => head,
        None => url_str,
    };

    let floor = without_fragment.find("://").map_or(0, |i| i + 3);
    if without_fragment.len() > floor && without_fragment.ends_with('/') {
        without_fragment.trim_end_matches('/').to_string()
    } else {
        without_fragment.to_string()
    }
}
