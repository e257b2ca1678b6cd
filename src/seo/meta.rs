//! Route metadata types.

use serde::Serialize;

use crate::content::ReadTime;

/// `og:type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }

    pub const fn is_article(self) -> bool {
        matches!(self, Self::Article)
    }
}

/// Preview card category. Selects the card label and fallback background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Project,
    Study,
    #[default]
    Default,
}

impl ContentType {
    /// Parse a `type` query value. Unknown values map to `Default`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Self::Blog,
            "project" => Self::Project,
            "study" => Self::Study,
            _ => Self::Default,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
            Self::Study => "study",
            Self::Default => "default",
        }
    }

    /// Human label shown on the card and in detail page titles.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blog => "Blog Post",
            Self::Project => "Project",
            Self::Study => "Study Material",
            Self::Default => "Portfolio",
        }
    }
}

/// Resolved head metadata for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetadata {
    pub title: String,
    pub description: String,
    /// Absolute URL of the social preview image.
    pub image: String,
    pub canonical_url: String,
    pub og_type: OgType,
    /// RFC 3339 publication time, articles only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<ReadTime>,
}

/// Per-request values that replace the matched route template.
///
/// `title` is the bare page title; the resolver adds the site suffix.
/// `card_image` becomes the background of the generated preview card and
/// does not touch `og:image` directly (use `image` for that).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub canonical_url: Option<String>,
    pub og_type: Option<OgType>,
    pub published_date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub content_type: Option<ContentType>,
    pub read_time: Option<ReadTime>,
    pub card_image: Option<String>,
}

impl MetaOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
