//! Mapping from page URLs to text file locations

use std::path::{Path, PathBuf};
use url::Url;

/// Maps a URL to a text file path within `base_dir`
///
/// The layout mirrors the URL: `base_dir/<host[:port]>/<segments...>/<name>.txt`
/// where `<name>` is the last path segment up to its first `.`. An empty path,
/// or a last segment with nothing before the dot, becomes `index`.
///
/// Returns None if the URL does not parse or has no host.
///
/// # Example
///
/// ```
/// use docs_harvest::extract::derive_output_path;
/// use std::path::Path;
///
/// let path = derive_output_path(Path::new("pages"), "https://x.com/docs/guide.html").unwrap();
/// assert_eq!(path, Path::new("pages/x.com/docs/guide.txt"));
/// ```
pub fn derive_output_path(base_dir: &Path, url: &str) -> Option<PathBuf> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    // Host is part of the path so different domains never collide
    let netloc = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    let mut segments: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let last = segments.pop().unwrap_or("index");
    let stem = last.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { "index" } else { stem };
    let filename = format!("{}.txt", stem);

    let mut path = base_dir.join(netloc);
    path.extend(segments);
    path.push(filename);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(url: &str) -> PathBuf {
        derive_output_path(Path::new("pages"), url).unwrap()
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            derive("https://cloud.example.com/retail/docs/overview"),
            Path::new("pages/cloud.example.com/retail/docs/overview.txt")
        );
    }

    #[test]
    fn test_extension_stripped() {
        assert_eq!(
            derive("https://x.com/docs/guide.html"),
            Path::new("pages/x.com/docs/guide.txt")
        );
        assert_eq!(
            derive("https://x.com/docs/archive.tar.gz"),
            Path::new("pages/x.com/docs/archive.txt")
        );
    }

    #[test]
    fn test_empty_path_is_index() {
        assert_eq!(derive("https://x.com"), Path::new("pages/x.com/index.txt"));
        assert_eq!(derive("https://x.com/"), Path::new("pages/x.com/index.txt"));
    }

    #[test]
    fn test_dotfile_segment_is_index() {
        assert_eq!(
            derive("https://x.com/docs/.hidden"),
            Path::new("pages/x.com/docs/index.txt")
        );
    }

    #[test]
    fn test_trailing_slash_and_query_ignored() {
        assert_eq!(
            derive("https://x.com/docs/guide/?lang=en"),
            Path::new("pages/x.com/docs/guide.txt")
        );
    }

    #[test]
    fn test_port_kept_in_host() {
        assert_eq!(
            derive("http://127.0.0.1:8080/docs/a"),
            Path::new("pages/127.0.0.1:8080/docs/a.txt")
        );
    }

    #[test]
    fn test_unusable_urls() {
        assert_eq!(derive_output_path(Path::new("pages"), "not a url"), None);
        assert_eq!(
            derive_output_path(Path::new("pages"), "mailto:docs@x.com"),
            None
        );
    }
}
