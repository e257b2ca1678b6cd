//! `folio meta`: resolve route metadata from the command line.
//!
//! Prints a JSON array with one entry per path, or the composed head tags
//! with `--head`. With `--records`, detail routes are filled from the
//! content directory the same way the server prerenders them.

use anyhow::Result;
use serde::Serialize;

use super::args::MetaArgs;
use super::common::write_output;
use crate::config::SiteConfig;
use crate::core::RoutePath;
use crate::log;
use crate::page::{Prepared, Prerenderer};
use crate::seo::{HeadTags, MetaOverrides, MetaTagResolver, RouteMetadata};
use crate::store::{FileSource, RecordSource};

/// Resolved metadata for one requested path.
#[derive(Debug, Serialize)]
pub struct MetaEntry {
    pub path: String,
    #[serde(flatten)]
    pub meta: RouteMetadata,
}

/// Execute meta command
pub fn run_meta(args: &MetaArgs, config: &SiteConfig) -> Result<()> {
    let files = FileSource::new(&config.content.dir);
    let source = args.records.then_some(&files as &dyn RecordSource);

    let entries = resolve_paths(&args.paths, config, source);

    let output = if args.head {
        render_heads(&entries, config)
    } else if args.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };

    write_output("meta", None, &output)
}

/// Resolve every path, loading records when a source is given.
pub fn resolve_paths(
    paths: &[String],
    config: &SiteConfig,
    source: Option<&dyn RecordSource>,
) -> Vec<MetaEntry> {
    let resolver = MetaTagResolver::new(config);

    paths
        .iter()
        .map(|raw| {
            let path = RoutePath::from_browser(raw);
            let meta = match source.map(|s| Prerenderer::new(config, s).prepare(&path)) {
                Some(Prepared::Page { meta, .. }) => meta,
                Some(Prepared::Redirect(to)) => {
                    log!("warning"; "{path}: record unavailable, the server redirects to {to}");
                    resolver.resolve(&path, &MetaOverrides::default())
                }
                None => resolver.resolve(&path, &MetaOverrides::default()),
            };
            MetaEntry {
                path: path.as_str().to_string(),
                meta,
            }
        })
        .collect()
}

/// Head tags per entry, labelled with an HTML comment when there are several.
fn render_heads(entries: &[MetaEntry], config: &SiteConfig) -> String {
    let labelled = entries.len() > 1;

    entries
        .iter()
        .map(|entry| {
            let head = HeadTags::from_meta(&entry.meta, config).render();
            if labelled {
                format!("<!-- {} -->\n{head}", entry.path)
            } else {
                head
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
