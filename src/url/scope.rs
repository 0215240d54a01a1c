use crate::url::normalize_url;
use url::Url;

/// The set of URLs admissible for traversal
///
/// A scope is a base prefix minus a list of excluded path segments. The base
/// prefix is normalized once at construction; exclude entries are normalized
/// to start with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Canonical base prefix, no trailing slash (the root keeps its `/`)
    base_prefix: String,

    /// Path component of the base prefix, without trailing slash
    base_path: String,

    /// Excluded path segments relative to `base_path`
    excludes: Vec<String>,
}

impl Scope {
    /// Creates a scope from a raw base prefix and exclude list
    pub fn new<S: AsRef<str>>(base_prefix: &str, excludes: &[S]) -> Self {
        let base_prefix = normalize_url(base_prefix.trim_end_matches('/'));

        let base_path = Url::parse(&base_prefix)
            .map(|url| url.path().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let excludes = excludes
            .iter()
            .map(|raw| normalize_exclude(raw.as_ref()))
            .collect();

        Self {
            base_prefix,
            base_path,
            excludes,
        }
    }

    /// The canonical base prefix
    pub fn base_prefix(&self) -> &str {
        &self.base_prefix
    }

    /// The normalized exclude entries, in the order given
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Returns true if the canonical `candidate` is inside this scope
    ///
    /// The prefix test is a literal string comparison, not path-segment
    /// aware: a base of `https://x.com/docs` also admits
    /// `https://x.com/docs-internal`.
    pub fn allows(&self, candidate: &str) -> bool {
        if !candidate.starts_with(&self.base_prefix) {
            return false;
        }

        let relative = self.relative_path(candidate);
        !self
            .excludes
            .iter()
            .any(|exclude| relative.starts_with(exclude.as_str()))
    }

    /// Path of `candidate` below the base path
    fn relative_path(&self, candidate: &str) -> String {
        match Url::parse(candidate) {
            Ok(url) => url
                .path()
                .get(self.base_path.len()..)
                .unwrap_or_default()
                .to_string(),
            Err(_) => {
                let rest = &candidate[self.base_prefix.len()..];
                let rest = rest.split(['?', '#']).next().unwrap_or_default();
                rest.to_string()
            }
        }
    }
}

/// Ensures an exclude entry starts with `/`
fn normalize_exclude(raw: &str) -> String {
    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    }
}

/// Checks a canonical URL against a base prefix and exclude list
///
/// Convenience wrapper around [`Scope::allows`] for one-off checks.
///
/// # Examples
///
/// ```
/// use docs_harvest::url::is_allowed;
///
/// let excludes = ["/reference"];
/// assert!(is_allowed("https://x.com/docs/guide", "https://x.com/docs", &excludes));
/// assert!(!is_allowed("https://x.com/docs/reference/x", "https://x.com/docs", &excludes));
/// assert!(!is_allowed("https://x.com/b", "https://x.com/a", &[] as &[&str]));
/// ```
pub fn is_allowed<S: AsRef<str>>(candidate: &str, base_prefix: &str, excludes: &[S]) -> bool {
    Scope::new(base_prefix, excludes).allows(candidate)
}
