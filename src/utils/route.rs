//! Route path helpers.
//!
//! Routes and locale prefixes are compared in a normalized form: a leading
//! `/`, no trailing `/` (except the root itself), no query or fragment.

/// Normalize a route path for prefix matching.
///
/// # Examples
/// ```ignore
/// normalize_route("zh/guide/")      -> "/zh/guide"
/// normalize_route("/zh/?q=1#top")   -> "/zh"
/// normalize_route("")               -> "/"
/// ```
pub fn normalize_route(route: &str) -> String {
    let path = route
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_matches('/');

    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{path}")
    }
}

/// Check whether `route` lies under the locale `prefix`.
///
/// Matching is segment-wise: `/zh/guide` and `/zh` match `/zh/`, `/zhx` does not.
pub fn route_has_prefix(route: &str, prefix: &str) -> bool {
    let route = normalize_route(route);
    let prefix = normalize_route(prefix);

    if prefix == "/" {
        return true;
    }

    route == prefix
        || route
            .strip_prefix(&prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Route prefix without trailing slash, `None` for the root.
///
/// This is the form the search widget expects (`"/zh/"` → `"/zh"`).
pub fn prefix_without_trailing_slash(prefix: &str) -> Option<String> {
    let normalized = normalize_route(prefix);
    (normalized != "/").then_some(normalized)
}
