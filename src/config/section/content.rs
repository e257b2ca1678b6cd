//! `[content]` section configuration.
//!
//! Where content records live and how their bodies are measured.
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content"          # content/<collection>/<id>.json
//! blog_wpm = 225           # reading speed for blog posts
//! study_wpm = 200          # reading speed for study material
//! excerpt_length = 160     # derived description length (characters)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Record directory (relative to the config file).
    pub dir: PathBuf,
    /// Words per minute for blog posts and projects.
    pub blog_wpm: u32,
    /// Words per minute for study material.
    pub study_wpm: u32,
    /// Maximum length of a description derived from a record body.
    pub excerpt_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            blog_wpm: 225,
            study_wpm: 200,
            excerpt_length: 160,
        }
    }
}

impl ContentConfig {
    pub const BLOG_WPM: FieldPath = FieldPath::new("content.blog_wpm");
    pub const STUDY_WPM: FieldPath = FieldPath::new("content.study_wpm");
    pub const EXCERPT_LENGTH: FieldPath = FieldPath::new("content.excerpt_length");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.blog_wpm == 0 {
            diag.error(Self::BLOG_WPM, "reading speed must be greater than 0");
        }
        if self.study_wpm == 0 {
            diag.error(Self::STUDY_WPM, "reading speed must be greater than 0");
        }
        if self.excerpt_length < 40 {
            diag.warn(
                Self::EXCERPT_LENGTH,
                format!("{} characters is short for a description", self.excerpt_length),
            );
        }
    }
}
