//! Image path resolution against the API base URL.

/// Resolve an image path returned by the API into a fetchable URL.
///
/// Absolute `http(s)://` and `data:` URLs pass through. Relative paths are
/// joined onto `base_url` with exactly one `/` between them. The base is not
/// validated: an empty base yields a root-relative path.
#[must_use]
pub fn resolve_asset_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
