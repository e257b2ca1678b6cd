//! Sitemap generation.
//!
//! Lists the static routes followed by every published record.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.dev/blogs/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::seo::MetaTagResolver;
use crate::store::{Collection, RecordSource};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    /// Collect static routes and all records from `source`.
    pub fn build(config: &SiteConfig, source: &dyn RecordSource) -> Result<Self> {
        let mut urls: Vec<UrlEntry> = MetaTagResolver::static_paths()
            .map(|path| UrlEntry {
                loc: config.absolute_url(path),
                lastmod: None,
            })
            .collect();

        for collection in Collection::ALL {
            let records = source
                .list(collection)
                .with_context(|| format!("Failed to list {collection}"))?;

            urls.extend(records.iter().map(|record| UrlEntry {
                loc: config.absolute_url(&collection.detail_route(&record.id).to_encoded()),
                lastmod: record.created().map(|t| t.to_date()),
            }));
        }

        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
