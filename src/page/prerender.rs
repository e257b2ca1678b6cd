//! Per-route prerendering: record lookup, metadata, document.
//!
//! ```text
//! /blogs/abc ─► fetch blogs/abc ─► normalize ─► overrides ─► resolve ─► head ─► shell
//!                     │ error
//!                     └─► redirect to /blogs
//! ```

use crate::config::SiteConfig;
use crate::content::ReadTime;
use crate::core::RoutePath;
use crate::seo::{HeadTags, MetaOverrides, MetaTagResolver, RouteMetadata};
use crate::store::{Collection, ContentRecord, RecordSource};
use crate::{debug, log};

use super::{PageRenderer, body};

/// Outcome of preparing a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    Page { meta: RouteMetadata, body: String },
    /// The record behind a detail route could not be loaded.
    Redirect(&'static str),
}

/// Ties the record source, resolver and renderer together for one site.
pub struct Prerenderer<'a> {
    config: &'a SiteConfig,
    source: &'a dyn RecordSource,
}

impl<'a> Prerenderer<'a> {
    pub const fn new(config: &'a SiteConfig, source: &'a dyn RecordSource) -> Self {
        Self { config, source }
    }

    /// Load whatever the route needs and resolve its metadata.
    pub fn prepare(&self, path: &RoutePath) -> Prepared {
        let resolver = MetaTagResolver::new(self.config);

        if let Some((collection, id)) = Collection::match_detail(path) {
            return match self.source.fetch(collection, id) {
                Ok(record) => {
                    let (overrides, body) = self.detail(collection, &record);
                    Prepared::Page {
                        meta: resolver.resolve(path, &overrides),
                        body,
                    }
                }
                Err(e) => {
                    log!("error"; "{path}: {e}");
                    Prepared::Redirect(collection.list_route())
                }
            };
        }

        let body = match Collection::match_list(path) {
            Some(collection) => self.listing(collection),
            None => String::new(),
        };

        Prepared::Page {
            meta: resolver.resolve(path, &MetaOverrides::default()),
            body,
        }
    }

    /// Full document for a prepared page.
    pub fn document(&self, meta: &RouteMetadata, body: &str) -> String {
        let head = HeadTags::from_meta(meta, self.config);
        PageRenderer::new(self.config).render(&head, body)
    }

    /// Document with site-default metadata and an empty root.
    pub fn shell(&self) -> String {
        let meta = MetaTagResolver::new(self.config).resolve(
            &RoutePath::new("/"),
            &MetaOverrides::default(),
        );
        self.document(&meta, "")
    }

    /// Overrides and article markup for one record.
    fn detail(&self, collection: Collection, record: &ContentRecord) -> (MetaOverrides, String) {
        let content = &self.config.content;
        let html = record.body_html();
        let read_time = crate::content::estimate_read_time(&html, collection.wpm(content));

        let overrides = record_overrides(record, read_time, content.excerpt_length, &html);
        let body = body::article(record, &html, read_time);
        (overrides, body)
    }

    fn listing(&self, collection: Collection) -> String {
        let records = match self.source.list(collection) {
            Ok(records) => records,
            Err(e) => {
                log!("warning"; "{collection}: {e}");
                Vec::new()
            }
        };
        debug!("store"; "{} {} records", records.len(), collection);
        body::listing(collection, &records, self.config.content.excerpt_length)
    }
}

/// Record fields that replace the detail template.
pub fn record_overrides(
    record: &ContentRecord,
    read_time: ReadTime,
    excerpt_length: usize,
    body_html: &str,
) -> MetaOverrides {
    let title = record.title.trim();
    let description = match record.excerpt.as_deref() {
        Some(excerpt) => excerpt.trim().to_string(),
        None => crate::content::excerpt(body_html, excerpt_length),
    };

    MetaOverrides {
        title: (!title.is_empty()).then(|| title.to_string()),
        description: (!description.is_empty()).then_some(description),
        published_date: record.created().map(|t| t.to_rfc3339()),
        tags: (!record.tags.is_empty()).then(|| record.tags.clone()),
        read_time: Some(read_time),
        card_image: record.image.clone(),
        ..Default::default()
    }
}
