//! Embedded HTML templates.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `card` - Social preview card (og.html)
//! - `page` - Document shell for prerendered routes (shell.html)
//! - `init` - Starter `folio.toml`
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{SHELL_HTML, ShellVars};
//!
//! let html = SHELL_HTML.render(&ShellVars { lang: "en", head: &head, body: "" });
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod card {
    use super::{Template, TemplateVars, substitute};

    /// Variables for og.html. Values must already be HTML-escaped.
    pub struct CardVars<'a> {
        pub title: &'a str,
        pub label: &'a str,
        pub image: &'a str,
        pub site_name: &'a str,
        pub footer: &'a str,
    }

    impl TemplateVars for CardVars<'_> {
        fn apply(&self, content: &str) -> String {
            substitute(
                content,
                &[
                    ("__TITLE__", self.title),
                    ("__LABEL__", self.label),
                    ("__IMAGE__", self.image),
                    ("__SITE_NAME__", self.site_name),
                    ("__FOOTER__", self.footer),
                ],
            )
        }
    }

    /// 1200×630 preview card.
    pub const OG_HTML: Template<CardVars<'static>> = Template::new(include_str!("card/og.html"));
}

pub mod page {
    use super::{Template, TemplateVars, substitute};

    /// Variables for shell.html.
    pub struct ShellVars<'a> {
        pub lang: &'a str,
        /// Rendered head tags and shell assets.
        pub head: &'a str,
        /// Prerendered markup inside `#root`.
        pub body: &'a str,
    }

    impl TemplateVars for ShellVars<'_> {
        fn apply(&self, content: &str) -> String {
            substitute(
                content,
                &[
                    ("__LANG__", self.lang),
                    ("__HEAD__", self.head),
                    ("__BODY__", self.body),
                ],
            )
        }
    }

    /// Document shell the SPA mounts into.
    pub const SHELL_HTML: Template<ShellVars<'static>> =
        Template::new(include_str!("page/shell.html"));
}

pub mod init {
    /// Commented starter config written by `folio init`.
    pub const CONFIG_TOML: &str = include_str!("init/folio.toml");
}
