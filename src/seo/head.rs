//! Head tag composition.
//!
//! [`HeadTags::from_meta`] turns resolved metadata into an ordered list of
//! tags. The page renderer writes them into the shell template; no markup
//! is ever patched after rendering.
//!
//! # Tag order
//!
//! ```text
//! <title>, description, keywords, canonical
//! og:type, og:title, og:description, og:image[, :width, :height], og:url,
//! og:site_name, og:locale
//! twitter:card, twitter:site, twitter:creator, twitter:title,
//! twitter:description, twitter:image
//! article:published_time, article:tag*   (articles)
//! twitter:label1/data1                    (reading time)
//! application/ld+json
//! ```

use super::jsonld::structured_data;
use super::meta::RouteMetadata;
use crate::config::SiteConfig;
use crate::utils::html::{escape, escape_attr, escape_script_json};

/// Preview cards are rendered at this size.
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;

/// One element in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=... content=...>`
    Name(&'static str, String),
    /// `<meta property=... content=...>`
    Property(&'static str, String),
    /// `<link rel=... href=...>`
    Link(&'static str, String),
    /// Serialized JSON-LD.
    JsonLd(String),
}

impl HeadTag {
    pub fn render(&self) -> String {
        match self {
            Self::Title(title) => format!("<title>{}</title>", escape(title)),
            Self::Name(name, content) => {
                format!("<meta name=\"{name}\" content=\"{}\">", escape_attr(content))
            }
            Self::Property(property, content) => format!(
                "<meta property=\"{property}\" content=\"{}\">",
                escape_attr(content)
            ),
            Self::Link(rel, href) => {
                format!("<link rel=\"{rel}\" href=\"{}\">", escape_attr(href))
            }
            Self::JsonLd(json) => format!(
                "<script type=\"application/ld+json\">{}</script>",
                escape_script_json(json)
            ),
        }
    }
}

/// Ordered head tags for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTags(Vec<HeadTag>);

impl HeadTags {
    pub fn from_meta(meta: &RouteMetadata, config: &SiteConfig) -> Self {
        let info = &config.site.info;
        let mut tags = Vec::with_capacity(32);

        tags.push(HeadTag::Title(meta.title.clone()));
        tags.push(HeadTag::Name("description", meta.description.clone()));
        if !meta.tags.is_empty() {
            tags.push(HeadTag::Name("keywords", meta.tags.join(", ")));
        }
        tags.push(HeadTag::Link("canonical", meta.canonical_url.clone()));

        // Open Graph
        tags.push(HeadTag::Property("og:type", meta.og_type.as_str().into()));
        tags.push(HeadTag::Property("og:title", meta.title.clone()));
        tags.push(HeadTag::Property("og:description", meta.description.clone()));
        tags.push(HeadTag::Property("og:image", meta.image.clone()));
        if is_generated_card(&meta.image, config) {
            tags.push(HeadTag::Property("og:image:width", CARD_WIDTH.to_string()));
            tags.push(HeadTag::Property("og:image:height", CARD_HEIGHT.to_string()));
        }
        tags.push(HeadTag::Property("og:url", meta.canonical_url.clone()));
        tags.push(HeadTag::Property("og:site_name", info.site_name().into()));
        tags.push(HeadTag::Property("og:locale", info.locale.clone()));

        // Twitter
        tags.push(HeadTag::Name("twitter:card", "summary_large_image".into()));
        if let Some(handle) = &info.twitter {
            tags.push(HeadTag::Name("twitter:site", handle.clone()));
            tags.push(HeadTag::Name("twitter:creator", handle.clone()));
        }
        tags.push(HeadTag::Name("twitter:title", meta.title.clone()));
        tags.push(HeadTag::Name("twitter:description", meta.description.clone()));
        tags.push(HeadTag::Name("twitter:image", meta.image.clone()));

        if meta.og_type.is_article() {
            if let Some(date) = &meta.published_date {
                tags.push(HeadTag::Property("article:published_time", date.clone()));
            }
            for tag in &meta.tags {
                tags.push(HeadTag::Property("article:tag", tag.clone()));
            }
        }

        if let Some(read_time) = meta.read_time {
            tags.push(HeadTag::Name("twitter:label1", "Reading time".into()));
            tags.push(HeadTag::Name("twitter:data1", read_time.to_string()));
        }

        let json = structured_data(meta, config).to_string();
        tags.push(HeadTag::JsonLd(json));

        Self(tags)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One tag per line.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(HeadTag::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether `image` points at this site's card endpoint.
fn is_generated_card(image: &str, config: &SiteConfig) -> bool {
    let endpoint = format!(
        "{}{}?",
        config.site.info.base_url(),
        config.preview.endpoint
    );
    image.starts_with(&endpoint)
}
