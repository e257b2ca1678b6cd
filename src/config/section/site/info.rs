//! `[site.info]` configuration.
//!
//! Site identity used by every generated head tag: the name that suffixes
//! page titles, the base URL canonical links are built from, the Twitter
//! handle and the fallback share image.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity and defaults for route metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Title of the home page and of unmatched routes.
    pub title: String,

    /// Owner name. Suffixes every page title (`Blog | <author>`).
    pub author: String,

    /// Site-wide description.
    pub description: String,

    /// Public base URL (e.g., "https://example.dev").
    pub url: Option<String>,

    /// Language code for `<html lang>` (e.g., "en").
    pub language: String,

    /// Open Graph locale (e.g., "en_US").
    pub locale: String,

    /// Twitter/X handle including `@`, emitted as `twitter:site`.
    pub twitter: Option<String>,

    /// Absolute URL of the fallback share image.
    pub image: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            author: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            locale: "en_US".into(),
            twitter: None,
            image: String::new(),
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.info.title");
    pub const AUTHOR: FieldPath = FieldPath::new("site.info.author");
    pub const URL: FieldPath = FieldPath::new("site.info.url");
    pub const TWITTER: FieldPath = FieldPath::new("site.info.twitter");
    pub const IMAGE: FieldPath = FieldPath::new("site.info.image");

    /// Name used in title suffixes and structured data. Falls back to the
    /// site title when no author is configured.
    pub fn site_name(&self) -> &str {
        if self.author.trim().is_empty() {
            &self.title
        } else {
            &self.author
        }
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Host part of the base URL, shown in preview card footers.
    pub fn domain(&self) -> String {
        self.url
            .as_deref()
            .and_then(|u| url::Url::parse(u).ok())
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
            .unwrap_or_default()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be a valid http(s) URL with a host
    /// - `image`, when set, must be an absolute http(s) URL
    /// - `twitter`, when set, should start with `@`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }

        if self.author.trim().is_empty() {
            diag.warn(Self::AUTHOR, "no author set, page titles use the site title");
        }

        match &self.url {
            None => diag.error_with_hint(
                Self::URL,
                "base URL is required for canonical links",
                "set it, e.g.: \"https://example.dev\"",
            ),
            Some(url_str) => validate_http_url(url_str, Self::URL, diag),
        }

        if !self.image.is_empty() {
            validate_http_url(&self.image, Self::IMAGE, diag);
        }

        if let Some(handle) = &self.twitter
            && !handle.starts_with('@')
        {
            diag.error_with_hint(
                Self::TWITTER,
                format!("twitter handle '{handle}' must start with '@'"),
                format!("use \"@{handle}\""),
            );
        }
    }
}

/// Report an error unless `value` is an absolute http(s) URL with a host.
pub(crate) fn validate_http_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.dev",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.dev",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.dev",
            );
        }
    }
}
