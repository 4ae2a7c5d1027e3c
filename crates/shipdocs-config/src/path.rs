//! Document path normalisation.
//!
//! Every path that enters the navigation model (sidebar entries, nav links,
//! discovered documents, lookups) goes through [`normalize_path`] so that
//! `guide/README.md`, `/guide/index.html` and `/guide/` all compare equal.

/// Normalise a site-internal document path.
///
/// - ensures a single leading `/`
/// - strips a `.md` or `.html` suffix
/// - turns a trailing `README`/`index` segment into the directory form (`/guide/`)
/// - collapses repeated slashes
///
/// ```
/// use shipdocs_config::normalize_path;
///
/// assert_eq!(normalize_path("guide/README.md"), "/guide/");
/// assert_eq!(normalize_path("/guide/connections.html"), "/guide/connections");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trailing_slash = path.ends_with('/');
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut is_dir = trailing_slash || segments.is_empty();
    if let Some(&last) = segments.last() {
        let stem = last
            .strip_suffix(".md")
            .or_else(|| last.strip_suffix(".html"))
            .unwrap_or(last);
        segments.pop();
        if stem.eq_ignore_ascii_case("readme") || stem.eq_ignore_ascii_case("index") {
            is_dir = true;
        } else {
            segments.push(stem);
        }
    }

    let mut result = String::with_capacity(path.len() + 2);
    result.push('/');
    result.push_str(&segments.join("/"));
    if is_dir && !segments.is_empty() {
        result.push('/');
    }
    result
}

/// Normalise a path prefix (sidebar section key, base path): leading and trailing `/`.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> String {
    let joined = prefix
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        "/".to_owned()
    } else {
        format!("/{joined}/")
    }
}

/// Resolve a sidebar entry path against its section prefix.
///
/// Absolute paths (leading `/`) are only normalised. Relative paths are joined
/// to the prefix, with the empty string meaning the section index itself.
#[must_use]
pub fn resolve_entry_path(prefix: &str, entry: &str) -> String {
    if entry.starts_with('/') {
        normalize_path(entry)
    } else if entry.is_empty() {
        normalize_path(prefix)
    } else {
        normalize_path(&format!("{prefix}{entry}"))
    }
}

/// Apply a base path (`/1.x/`) to a normalised internal path.
#[must_use]
pub fn with_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}{path}")
}

/// Derive a display title from the last segment of a document path.
///
/// `/reference/collect/file-read` becomes "File Read", a directory path uses
/// its directory name and the root becomes "Home".
#[must_use]
pub fn title_from_path(path: &str) -> String {
    match path.trim_end_matches('/').rsplit('/').next() {
        None | Some("") => "Home".to_owned(),
        Some(slug) => titlecase_from_slug(slug),
    }
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("README.md"), "/");
        assert_eq!(normalize_path("README"), "/");
        assert_eq!(normalize_path("guide"), "/guide");
        assert_eq!(normalize_path("/guide/"), "/guide/");
        assert_eq!(normalize_path("/guide/README.md"), "/guide/");
        assert_eq!(normalize_path("/guide/index.html"), "/guide/");
        assert_eq!(normalize_path("/guide/readme"), "/guide/");
        assert_eq!(normalize_path("/guide/connections.md"), "/guide/connections");
        assert_eq!(normalize_path("//guide//collect"), "/guide/collect");
        assert_eq!(
            normalize_path("/reference/collect/docker-images.html"),
            "/reference/collect/docker-images"
        );
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix(""), "/");
        assert_eq!(normalize_prefix("/"), "/");
        assert_eq!(normalize_prefix("/guide"), "/guide/");
        assert_eq!(normalize_prefix("guide/"), "/guide/");
        assert_eq!(normalize_prefix("/guide/sub/"), "/guide/sub/");
    }

    #[test]
    fn test_resolve_entry_path() {
        assert_eq!(resolve_entry_path("/guide/", ""), "/guide/");
        assert_eq!(
            resolve_entry_path("/guide/", "connections"),
            "/guide/connections"
        );
        assert_eq!(
            resolve_entry_path("/guide/", "/reference/connection/mysql"),
            "/reference/connection/mysql"
        );
        assert_eq!(resolve_entry_path("/guide/", "sub/README.md"), "/guide/sub/");
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path("/"), "Home");
        assert_eq!(title_from_path("/guide/"), "Guide");
        assert_eq!(title_from_path("/reference/collect/file-read"), "File Read");
        assert_eq!(title_from_path("/reference/collect/yaml_key"), "Yaml Key");
    }

    #[test]
    fn test_with_base() {
        assert_eq!(with_base("/", "/guide/intro"), "/guide/intro");
        assert_eq!(with_base("/1.x/", "/guide/intro"), "/1.x/guide/intro");
        assert_eq!(with_base("/1.x/", "/"), "/1.x/");
    }
}
