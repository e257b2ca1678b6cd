//! Content record shape.
//!
//! Blogs, projects and study materials share one record type. Each table
//! names a few columns differently, so the decoder accepts the aliases:
//!
//! | Field     | Also accepted                                       |
//! |-----------|-----------------------------------------------------|
//! | `excerpt` | `description`                                       |
//! | `tags`    | `technologies`                                      |
//! | `image`   | `featured_image_url`, `image_url`, `thumbnail_url`  |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{self, ReadTime};
use crate::utils::date::Timestamp;

/// One blog post, project or study material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    /// Stored body: HTML string or legacy block document.
    pub content: Value,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub created_at: Option<String>,
}

impl ContentRecord {
    /// Parsed `created_at`, if present and well-formed.
    pub fn created(&self) -> Option<Timestamp> {
        self.created_at.as_deref().and_then(Timestamp::parse)
    }

    /// Body normalized to HTML.
    pub fn body_html(&self) -> String {
        content::normalize(&self.content)
    }

    pub fn read_time(&self, wpm: u32) -> ReadTime {
        content::estimate_read_time(&self.body_html(), wpm)
    }

    /// Stored excerpt, or one derived from the body.
    pub fn summary(&self, max_chars: usize) -> String {
        match self.excerpt.as_deref().map(str::trim) {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => content::excerpt(&self.body_html(), max_chars),
        }
    }
}

/// Wire shape with every alias spelled out.
///
/// Aliases are separate fields so a row carrying both `image_url` and
/// `thumbnail_url` still decodes (the first non-empty one wins).
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    technologies: Option<Vec<String>>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    featured_image_url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<RawRecord> for ContentRecord {
    fn from(raw: RawRecord) -> Self {
        let id = match raw.id {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };

        let tags = raw
            .tags
            .or(raw.technologies)
            .unwrap_or_default()
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let image = [
            raw.image,
            raw.featured_image_url,
            raw.image_url,
            raw.thumbnail_url,
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty());

        Self {
            id,
            title: raw.title,
            content: raw.content,
            excerpt: non_empty(raw.excerpt).or_else(|| non_empty(raw.description)),
            tags,
            image,
            created_at: non_empty(raw.created_at),
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ContentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_blog_shape() {
        let r = record(json!({
            "id": "hello",
            "title": "Hello",
            "content": "<p>Hi there</p>",
            "excerpt": "Short",
            "tags": ["rust", " ", "web"],
            "featured_image_url": "https://cdn.example.dev/cover.png",
            "created_at": "2024-06-15T14:30:45Z"
        }));
        assert_eq!(r.id, "hello");
        assert_eq!(r.tags, ["rust", "web"]);
        assert_eq!(r.image.as_deref(), Some("https://cdn.example.dev/cover.png"));
        assert_eq!(r.created().unwrap().to_date(), "2024-06-15");
        assert_eq!(r.summary(160), "Short");
    }

    #[test]
    fn test_project_shape() {
        let r = record(json!({
            "id": 42,
            "title": "Tool",
            "description": "A tool",
            "technologies": ["Rust"],
            "image_url": "",
            "thumbnail_url": "https://cdn.example.dev/t.png"
        }));
        assert_eq!(r.id, "42");
        assert_eq!(r.excerpt.as_deref(), Some("A tool"));
        assert_eq!(r.tags, ["Rust"]);
        assert_eq!(r.image.as_deref(), Some("https://cdn.example.dev/t.png"));
        assert!(r.created().is_none());
    }

    #[test]
    fn test_summary_derived_from_body() {
        let r = record(json!({
            "title": "Notes",
            "content": {"blocks": [{"kind": "paragraph", "payload": {"text": "Derived text"}}]},
            "excerpt": "  "
        }));
        assert_eq!(r.excerpt, None);
        assert_eq!(r.body_html(), "<p>Derived text</p>");
        assert_eq!(r.summary(160), "Derived text");
        assert_eq!(r.read_time(200).to_string(), "1 min read");
    }
}
