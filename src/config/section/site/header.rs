//! `[site.header]` configuration: app shell assets.
//!
//! The SPA bundle entry points that every prerendered document loads.
//! Paths are URLs as the browser sees them (usually under the public dir).

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Favicon URL (e.g., "/favicon.svg").
    pub icon: Option<String>,
    /// Stylesheet URLs.
    pub styles: Vec<String>,
    /// Script entries.
    pub scripts: Vec<ScriptEntry>,
    /// Raw HTML elements appended to `<head>` (trusted input).
    pub elements: Vec<String>,
}

impl HeaderConfig {
    pub const STYLES: FieldPath = FieldPath::new("site.header.styles");
    pub const SCRIPTS: FieldPath = FieldPath::new("site.header.scripts");

    /// Empty entries are always a typo.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.styles.iter().any(|s| s.trim().is_empty()) {
            diag.error(Self::STYLES, "stylesheet URL must not be empty");
        }
        if self.scripts.iter().any(|s| s.src().trim().is_empty()) {
            diag.error(Self::SCRIPTS, "script URL must not be empty");
        }
    }
}

// ============================================================================
// Script Entry
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    /// Simple URL string.
    Simple(String),
    /// URL with `defer`/`async`/`module` attributes.
    WithOptions {
        src: String,
        #[serde(default)]
        defer: bool,
        #[serde(default)]
        r#async: bool,
        #[serde(default)]
        module: bool,
    },
}

impl ScriptEntry {
    pub fn src(&self) -> &str {
        match self {
            Self::Simple(src) | Self::WithOptions { src, .. } => src,
        }
    }

    pub const fn is_defer(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::WithOptions { defer, .. } => *defer,
        }
    }

    pub const fn is_async(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::WithOptions { r#async, .. } => *r#async,
        }
    }

    /// Vite-style bundles are ES modules.
    pub const fn is_module(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::WithOptions { module, .. } => *module,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_header_config_defaults() {
        let config = test_parse_config("");
        assert!(config.site.header.icon.is_none());
        assert!(config.site.header.styles.is_empty());
        assert!(config.site.header.scripts.is_empty());
    }

    #[test]
    fn test_script_entries() {
        let config = test_parse_config(
            r#"
[site.header]
icon = "/favicon.svg"
styles = ["/assets/index.css"]
scripts = ["/legacy.js", { src = "/assets/index.js", module = true }, { src = "/a.js", defer = true, async = true }]
"#,
        );
        let scripts = &config.site.header.scripts;
        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0].src(), "/legacy.js");
        assert!(!scripts[0].is_module());
        assert!(scripts[1].is_module());
        assert!(scripts[2].is_defer());
        assert!(scripts[2].is_async());
    }

    #[test]
    fn test_validate_empty_entries() {
        let config = test_parse_config("[site.header]\nstyles = [\"\"]\nscripts = [\" \"]");
        let mut diag = ConfigDiagnostics::new();
        config.site.header.validate(&mut diag);
        assert_eq!(diag.errors().count(), 2);
    }
}
