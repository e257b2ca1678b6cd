//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Jane Doe | Software Engineer"
//! author = "Jane Doe"
//! description = "Projects, articles and study notes."
//! url = "https://janedoe.dev"
//! twitter = "@janedoe"
//! image = "https://janedoe.dev/og-default.png"
//!
//! [site.header]
//! icon = "/favicon.svg"
//! styles = ["/assets/index.css"]
//! scripts = [{ src = "/assets/index.js", module = true }]
//! ```

mod header;
mod info;

pub use header::{HeaderConfig, ScriptEntry};
pub use info::SiteInfoConfig;
pub(crate) use info::validate_http_url;

use serde::{Deserialize, Serialize};

/// Site section configuration containing identity and shell assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site identity (title, author, url, etc.)
    pub info: SiteInfoConfig,

    /// App shell `<head>` assets.
    pub header: HeaderConfig,
}
