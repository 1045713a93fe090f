use regex::Regex;

use crate::domain::BlobRef;

/// Blob-view URL shape. The path capture is lazy so an optional trailing
/// line anchor (`#L10` or `/#L10-L20`) never leaks into the path.
const BLOB_URL_PATTERN: &str =
    r"^https://github\.com/([^/]+)/([^/]+)/blob/([^/]+)/(.*?)(?:/?#L\d+(?:-L\d+)?)?$";

/// Turns GitHub blob-view URLs into their `(owner, repo, ref, path)`
/// components. Pure string transformation, no I/O.
pub struct UrlResolver {
    pattern: Regex,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(BLOB_URL_PATTERN).unwrap(),
        }
    }

    /// `None` means the URL does not have the expected shape and the row
    /// must be classified as `INVALID_URL`. Matching is strict: the URL is
    /// taken exactly as it appears in the manifest, padding included.
    pub fn resolve(&self, url: &str) -> Option<BlobRef> {
        let captures = self.pattern.captures(url)?;
        let path = captures[4].to_string();
        if path.is_empty() {
            return None;
        }
        Some(BlobRef {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            reference: captures[3].to_string(),
            path,
        })
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new()
    }
}
