//! `folio init`: starter config and content directories.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::embed::init::CONFIG_TOML;
use crate::log;
use crate::store::Collection;

/// Write `folio.toml` and create `content/<collection>/` and the public dir.
///
/// Refuses to overwrite an existing config.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let config_path = &config.config_path;
    if config_path.exists() {
        bail!(
            "{} already exists, remove it first to start over",
            config_path.display()
        );
    }

    let root = config.get_root();
    create_dir(root)?;
    for collection in Collection::ALL {
        create_dir(&config.content.dir.join(collection.segment()))?;
    }
    create_dir(&config.serve.public)?;

    fs::write(config_path, CONFIG_TOML)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;

    log!("init"; "site initialized in {}", root.display());
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = root.to_path_buf();
        config.config_path = root.join("folio.toml");
        config.content.dir = root.join("content");
        config.serve.public = root.join("dist");
        config
    }

    #[test]
    fn test_template_parses() {
        let config = SiteConfig::from_str(CONFIG_TOML).unwrap();
        assert_eq!(config.preview.endpoint, "/api/og");
        assert_eq!(config.content.blog_wpm, 225);
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_new_site() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        let config = init_config(&root);

        new_site(&config).unwrap();
        assert!(root.join("folio.toml").is_file());
        assert!(root.join("content/blogs").is_dir());
        assert!(root.join("content/study-material").is_dir());
        assert!(root.join("dist").is_dir());
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config = init_config(dir.path());
        fs::write(dir.path().join("folio.toml"), "# mine").unwrap();

        assert!(new_site(&config).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join("folio.toml")).unwrap(),
            "# mine"
        );
    }
}
