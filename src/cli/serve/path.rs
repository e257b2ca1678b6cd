//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under `serve_root`.
///
/// Directories never resolve: routes without a file are pages and get a
/// prerendered document instead of the bundle's `index.html`.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    // Reject paths with suspicious patterns early
    if clean.is_empty() || clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: strip query string and fragment, decode, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;

    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    decoded.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/app.js"), "x").unwrap();
        fs::write(dir.path().join("a b.txt"), "x").unwrap();

        let found = resolve_path("/assets/app.js?v=1", dir.path()).unwrap();
        assert!(found.ends_with("assets/app.js"));
        assert!(resolve_path("/a%20b.txt", dir.path()).is_some());
    }

    #[test]
    fn test_directories_and_missing_do_not_resolve() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blogs")).unwrap();
        fs::write(dir.path().join("index.html"), "shell").unwrap();

        assert!(resolve_path("/", dir.path()).is_none());
        assert!(resolve_path("/blogs", dir.path()).is_none());
        assert!(resolve_path("/blogs/abc", dir.path()).is_none());
    }

    #[test]
    fn test_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(dir.path().join("secret.txt"), "x").unwrap();

        assert!(resolve_path("/../secret.txt", &public).is_none());
        assert!(resolve_path("/%2e%2e/secret.txt", &public).is_none());
    }
}
