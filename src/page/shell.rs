//! Document shell around composed head tags.

use crate::config::SiteConfig;
use crate::embed::page::{SHELL_HTML, ShellVars};
use crate::seo::HeadTags;
use crate::utils::{html::escape_attr, mime};

/// Renders full HTML documents for the SPA.
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageRenderer<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Doctype, `<html lang>`, composed head, shell assets and `#root` body.
    pub fn render(&self, head: &HeadTags, body: &str) -> String {
        let mut head_html = head.render();
        for asset in self.asset_tags() {
            head_html.push('\n');
            head_html.push_str(&asset);
        }

        SHELL_HTML.render(&ShellVars {
            lang: &escape_attr(&self.config.site.info.language),
            head: &head_html,
            body,
        })
    }

    /// Icon, stylesheets, scripts and raw elements from `[site.header]`.
    fn asset_tags(&self) -> Vec<String> {
        let header = &self.config.site.header;
        let mut tags = Vec::new();

        if let Some(icon) = &header.icon {
            tags.push(format!(
                "<link rel=\"icon\" href=\"{}\" type=\"{}\">",
                escape_attr(icon),
                mime::for_icon(icon)
            ));
        }

        for style in &header.styles {
            tags.push(format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape_attr(style)
            ));
        }

        for script in &header.scripts {
            let mut tag = format!("<script src=\"{}\"", escape_attr(script.src()));
            if script.is_module() {
                tag.push_str(" type=\"module\"");
            }
            if script.is_defer() {
                tag.push_str(" defer");
            }
            if script.is_async() {
                tag.push_str(" async");
            }
            tag.push_str("></script>");
            tags.push(tag);
        }

        // Raw elements are trusted config input.
        tags.extend(header.elements.iter().cloned());
        tags
    }
}
