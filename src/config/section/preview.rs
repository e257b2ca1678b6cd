//! `[preview]` section configuration.
//!
//! Social preview cards served at `endpoint`.
//!
//! # Example
//!
//! ```toml
//! [preview]
//! enable = true
//! endpoint = "/api/og"
//!
//! [preview.backgrounds]
//! blog = "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=1200&h=630&fit=crop"
//! ```

use serde::{Deserialize, Serialize};

use super::site::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Preview card settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Point `og:image` at generated cards. When off, every page shares
    /// `site.info.image`.
    pub enable: bool,

    /// Route the card renderer is served at.
    pub endpoint: String,

    /// Longest accepted card title, in characters.
    pub max_title: usize,

    /// Fallback background per content type.
    pub backgrounds: BackgroundsConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enable: true,
            endpoint: "/api/og".into(),
            max_title: 300,
            backgrounds: BackgroundsConfig::default(),
        }
    }
}

/// Background image URL per card type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundsConfig {
    pub blog: String,
    pub project: String,
    pub study: String,
    pub default: String,
}

impl Default for BackgroundsConfig {
    fn default() -> Self {
        Self {
            blog: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=1200&h=630&fit=crop"
                .into(),
            project:
                "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=1200&h=630&fit=crop"
                    .into(),
            study: "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?w=1200&h=630&fit=crop"
                .into(),
            default:
                "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=1200&h=630&fit=crop"
                    .into(),
        }
    }
}

impl PreviewConfig {
    pub const ENDPOINT: FieldPath = FieldPath::new("preview.endpoint");
    pub const MAX_TITLE: FieldPath = FieldPath::new("preview.max_title");
    pub const BG_BLOG: FieldPath = FieldPath::new("preview.backgrounds.blog");
    pub const BG_PROJECT: FieldPath = FieldPath::new("preview.backgrounds.project");
    pub const BG_STUDY: FieldPath = FieldPath::new("preview.backgrounds.study");
    pub const BG_DEFAULT: FieldPath = FieldPath::new("preview.backgrounds.default");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.endpoint.starts_with('/') || self.endpoint.contains('?') {
            diag.error_with_hint(
                Self::ENDPOINT,
                format!("endpoint '{}' must be an absolute path", self.endpoint),
                "use a path like \"/api/og\"",
            );
        }

        if self.max_title == 0 {
            diag.error(Self::MAX_TITLE, "must be greater than 0");
        }

        let bg = &self.backgrounds;
        for (value, field) in [
            (&bg.blog, Self::BG_BLOG),
            (&bg.project, Self::BG_PROJECT),
            (&bg.study, Self::BG_STUDY),
            (&bg.default, Self::BG_DEFAULT),
        ] {
            validate_http_url(value, field, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_preview_defaults() {
        let config = test_parse_config("");
        assert!(config.preview.enable);
        assert_eq!(config.preview.endpoint, "/api/og");
        assert_eq!(config.preview.max_title, 300);
        assert!(config.preview.backgrounds.blog.starts_with("https://"));
    }

    #[test]
    fn test_preview_override() {
        let config = test_parse_config(
            "[preview]\nenable = false\nendpoint = \"/og\"\n[preview.backgrounds]\nstudy = \"https://cdn.example.dev/s.png\"",
        );
        assert!(!config.preview.enable);
        assert_eq!(config.preview.endpoint, "/og");
        assert_eq!(
            config.preview.backgrounds.study,
            "https://cdn.example.dev/s.png"
        );
        // untouched backgrounds keep their defaults
        assert!(config.preview.backgrounds.blog.contains("unsplash"));
    }

    #[test]
    fn test_validate() {
        let mut preview = PreviewConfig::default();
        let mut diag = ConfigDiagnostics::new();
        preview.validate(&mut diag);
        assert!(!diag.has_errors());

        preview.endpoint = "api/og".into();
        preview.max_title = 0;
        preview.backgrounds.project = "relative.png".into();
        let mut diag = ConfigDiagnostics::new();
        preview.validate(&mut diag);
        assert_eq!(diag.errors().count(), 3);
    }
}
