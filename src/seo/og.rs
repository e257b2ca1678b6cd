//! Social preview card rendering.
//!
//! `GET /api/og?title=&type=&path=&image=` answers with a 1200×630 HTML
//! card. The output depends only on the query and the site config, so it
//! is served with an immutable cache header.

use thiserror::Error;

use super::meta::ContentType;
use crate::config::SiteConfig;
use crate::core::{Query, QueryError};
use crate::embed::card::{CardVars, OG_HTML};
use crate::utils::html::{escape, escape_attr};

/// Card rendering failure. Reported as HTTP 500.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("title is {len} characters long, at most {max} are allowed")]
    TitleTooLong { len: usize, max: usize },

    #[error("image '{0}' is not an absolute http(s) URL")]
    InvalidImage(String),
}

/// Card inputs, as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewCardRequest {
    pub title: String,
    pub content_type: ContentType,
    pub image_url: Option<String>,
    pub path: String,
}

impl PreviewCardRequest {
    /// Read `title`, `type`, `path` and `image`. Missing values take the
    /// per-type defaults at render time.
    pub fn from_query(query: &Query) -> Self {
        Self {
            title: query.get("title").unwrap_or_default().to_string(),
            content_type: ContentType::parse(query.get("type").unwrap_or_default()),
            image_url: query.get_non_empty("image").map(str::to_string),
            path: query.get("path").unwrap_or_default().to_string(),
        }
    }

    /// Parse from a full request URL.
    pub fn from_url(url: &str) -> Result<Self, PreviewError> {
        Ok(Self::from_query(&Query::from_url(url)?))
    }
}

/// Renders preview cards for one site.
#[derive(Debug, Clone, Copy)]
pub struct PreviewImageRenderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> PreviewImageRenderer<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Render a request URL (`/api/og?...`) straight to HTML.
    pub fn render_url(&self, url: &str) -> Result<String, PreviewError> {
        self.render(&PreviewCardRequest::from_url(url)?)
    }

    pub fn render(&self, request: &PreviewCardRequest) -> Result<String, PreviewError> {
        let info = &self.config.site.info;

        let title = match request.title.trim() {
            "" => info.site_name(),
            title => title,
        };
        let len = title.chars().count();
        let max = self.config.preview.max_title;
        if len > max {
            return Err(PreviewError::TitleTooLong { len, max });
        }

        let image = match &request.image_url {
            Some(raw) => checked_image_url(raw)?,
            None => css_url(self.background(request.content_type)),
        };

        let footer = footer_text(&info.domain(), &request.path);

        Ok(OG_HTML.render(&CardVars {
            title: &escape(title),
            label: &escape(request.content_type.label()),
            image: &escape_attr(&image),
            site_name: &escape(info.site_name()),
            footer: &escape(&footer),
        }))
    }

    /// Configured fallback background for a card type.
    pub fn background(&self, content_type: ContentType) -> &'a str {
        let backgrounds = &self.config.preview.backgrounds;
        match content_type {
            ContentType::Blog => &backgrounds.blog,
            ContentType::Project => &backgrounds.project,
            ContentType::Study => &backgrounds.study,
            ContentType::Default => &backgrounds.default,
        }
    }
}

/// Absolute http(s) URL in serialized form (quotes and spaces encoded).
fn checked_image_url(raw: &str) -> Result<String, PreviewError> {
    let invalid = || PreviewError::InvalidImage(raw.to_string());
    let parsed = url::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(css_url(parsed.as_str()))
}

/// Percent-encode the characters that can close a CSS `url('...')`.
///
/// The value lands in a `style` attribute, where entity escapes are undone
/// before the CSS is parsed, so attribute escaping alone is not enough.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// `domain/path`, or just `domain` when there is no path.
fn footer_text(domain: &str, path: &str) -> String {
    let path = path.trim().trim_matches('/');
    match (domain.is_empty(), path.is_empty()) {
        (_, true) => domain.to_string(),
        (true, false) => format!("/{path}"),
        (false, false) => format!("{domain}/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn request(title: &str, ty: ContentType, path: &str) -> PreviewCardRequest {
        PreviewCardRequest {
            title: title.into(),
            content_type: ty,
            image_url: None,
            path: path.into(),
        }
    }

    #[test]
    fn test_render_blog_card() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render(&request("T", ContentType::Blog, ""))
            .unwrap();

        assert!(html.contains("<h1 class=\"title\">T</h1>"));
        assert!(html.contains("Blog Post"));
        assert!(html.contains("<span class=\"url\">example.dev</span>"));
        assert!(html.contains("photo-1499750310107"));
        assert!(html.contains("&amp;h=630"));
    }

    #[test]
    fn test_footer_with_path() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render(&request("T", ContentType::Project, "/projects/tool"))
            .unwrap();
        assert!(html.contains("<span class=\"url\">example.dev/projects/tool</span>"));
        assert!(html.contains(">Project<"));
    }

    #[test]
    fn test_text_is_escaped() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render(&request("<script>alert(1)</script>", ContentType::Default, ""))
            .unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_placeholder_in_title_not_expanded() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render(&request("__FOOTER__", ContentType::Default, ""))
            .unwrap();
        assert!(html.contains("<h1 class=\"title\">__FOOTER__</h1>"));
    }

    #[test]
    fn test_empty_title_uses_site_name() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render(&request("   ", ContentType::Default, ""))
            .unwrap();
        assert!(html.contains("<h1 class=\"title\">Test Author</h1>"));
        assert!(html.contains("Portfolio"));
    }

    #[test]
    fn test_image_param() {
        let config = test_parse_config("");
        let renderer = PreviewImageRenderer::new(&config);

        let html = renderer
            .render_url("/api/og?title=x&type=study&image=https%3A%2F%2Fcdn.example.dev%2Fa%20b.png")
            .unwrap();
        assert!(html.contains("url('https://cdn.example.dev/a%20b.png')"));
        assert!(html.contains("Study Material"));

        let err = renderer
            .render_url("/api/og?title=x&image=javascript%3Aalert(1)")
            .unwrap_err();
        assert!(matches!(err, PreviewError::InvalidImage(_)));
    }

    #[test]
    fn test_image_cannot_close_css_url() {
        let config = test_parse_config("");
        let html = PreviewImageRenderer::new(&config)
            .render_url("/api/og?title=x&image=https%3A%2F%2Fx.dev%2Fa')%3Bbackground%3Ared%3Bx%3A('")
            .unwrap();

        assert!(html.contains("url('https://x.dev/a%27%29;background:red;x:%28%27')"));
        assert!(!html.contains("&#39;"));
    }

    #[test]
    fn test_configured_background_is_css_safe() {
        let config = test_parse_config(
            "[preview.backgrounds]\nblog = \"https://img.dev/b(1)'.png\"",
        );
        let html = PreviewImageRenderer::new(&config)
            .render(&request("T", ContentType::Blog, ""))
            .unwrap();
        assert!(html.contains("url('https://img.dev/b%281%29%27.png')"));
    }

    #[test]
    fn test_css_url() {
        assert_eq!(css_url("https://a.dev/x.png"), "https://a.dev/x.png");
        assert_eq!(css_url("a'b\"c(d)e\\f"), "a%27b%22c%28d%29e%5Cf");
        assert_eq!(css_url("a\nb"), "ab");
    }

    #[test]
    fn test_unknown_type_is_default() {
        let req = PreviewCardRequest::from_url("/api/og?title=x&type=podcast").unwrap();
        assert_eq!(req.content_type, ContentType::Default);
        assert_eq!(req.path, "");
    }

    #[test]
    fn test_title_too_long() {
        let config = test_parse_config("");
        let long = "a".repeat(301);
        let err = PreviewImageRenderer::new(&config)
            .render(&request(&long, ContentType::Blog, ""))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "title is 301 characters long, at most 300 are allowed"
        );
    }

    #[test]
    fn test_bad_query() {
        let config = test_parse_config("");
        let err = PreviewImageRenderer::new(&config)
            .render_url("/api/og?title=%FF")
            .unwrap_err();
        assert!(matches!(err, PreviewError::Query(_)));
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text("example.dev", ""), "example.dev");
        assert_eq!(footer_text("example.dev", "/"), "example.dev");
        assert_eq!(footer_text("example.dev", "/blogs/a"), "example.dev/blogs/a");
        assert_eq!(footer_text("", "blogs"), "/blogs");
    }
}
