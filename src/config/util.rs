//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/blogs/  ← cwd
/// /home/user/site/folio.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk up from `start` looking for `name`.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve `path` against `root` and make it absolute.
///
/// Canonicalizes when the path exists so symlinked roots compare equal.
pub fn normalize_path(root: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/blogs");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));
    }

    #[test]
    fn test_find_upward_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_upward(dir.path(), Path::new("definitely-not-here.toml")).is_none());
    }

    #[test]
    fn test_normalize_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();

        let resolved = normalize_path(dir.path(), Path::new("dist"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("dist"));

        let missing = normalize_path(dir.path(), Path::new("nope"));
        assert_eq!(missing, dir.path().join("nope"));

        let absolute = normalize_path(dir.path(), Path::new("/srv/site"));
        assert!(absolute.ends_with("srv/site"));
    }
}
