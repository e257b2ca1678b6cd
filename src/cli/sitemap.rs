//! `folio sitemap`: write sitemap.xml from the route table and records.

use std::path::Path;

use anyhow::Result;

use super::common::write_output;
use crate::config::SiteConfig;
use crate::generator::Sitemap;
use crate::log;
use crate::store::FileSource;

/// Execute sitemap command
pub fn run_sitemap(output: Option<&Path>, config: &SiteConfig) -> Result<()> {
    if config.site.info.url.is_none() {
        log!("warning"; "site.info.url is not set, sitemap locations will be relative");
    }

    let source = FileSource::new(&config.content.dir);
    let sitemap = Sitemap::build(config, &source)?;
    log!("sitemap"; "{} urls", sitemap.len());

    write_output("sitemap", output, &sitemap.into_xml())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    #[test]
    fn test_writes_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content/blogs")).unwrap();
        fs::write(
            dir.path().join("content/blogs/hello.json"),
            r#"{"title": "Hello", "content": "", "created_at": "2024-01-02T03:04:05Z"}"#,
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.content.dir = dir.path().join("content");
        let output = dir.path().join("dist/sitemap.xml");

        run_sitemap(Some(&output), &config).unwrap();
        let xml = fs::read_to_string(output).unwrap();
        assert!(xml.contains("<loc>https://example.dev/blogs/hello</loc>"));
        assert!(xml.contains("<lastmod>2024-01-02</lastmod>"));
    }
}
