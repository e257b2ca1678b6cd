//! schema.org structured data.

use serde_json::{Value, json};

use super::meta::{ContentType, RouteMetadata};
use crate::config::SiteConfig;

/// JSON-LD object for a route.
///
/// Website pages describe the site itself; articles use the schema type of
/// their collection (`BlogPosting`, `CreativeWork`, `LearningResource`).
pub fn structured_data(meta: &RouteMetadata, config: &SiteConfig) -> Value {
    let info = &config.site.info;
    let author = json!({
        "@type": "Person",
        "name": info.site_name(),
        "url": info.base_url(),
    });

    if !meta.og_type.is_article() {
        return json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": meta.title,
            "description": meta.description,
            "url": meta.canonical_url,
            "inLanguage": info.language,
            "author": author,
        });
    }

    let schema_type = match meta.content_type {
        ContentType::Blog => "BlogPosting",
        ContentType::Study => "LearningResource",
        ContentType::Project | ContentType::Default => "CreativeWork",
    };

    let suffix = format!(" | {}", info.site_name());
    let headline = meta.title.strip_suffix(&suffix).unwrap_or(&meta.title);

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": schema_type,
        "headline": headline,
        "description": meta.description,
        "image": meta.image,
        "url": meta.canonical_url,
        "mainEntityOfPage": { "@type": "WebPage", "@id": meta.canonical_url },
        "inLanguage": info.language,
        "author": author,
        "publisher": author,
    });

    if let Some(date) = &meta.published_date {
        data["datePublished"] = json!(date);
    }
    if !meta.tags.is_empty() {
        data["keywords"] = json!(meta.tags.join(", "));
    }
    if let Some(read_time) = meta.read_time {
        data["timeRequired"] = json!(format!("PT{}M", read_time.minutes()));
    }

    data
}
