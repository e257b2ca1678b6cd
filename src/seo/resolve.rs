//! Route → metadata resolution.
//!
//! # Resolution order
//!
//! 1. Static table (`/`, `/blogs`, `/projects`, ...): fixed copy.
//! 2. Detail patterns (`/<collection>/:id`), tried in [`Collection::ALL`]
//!    order: templated copy, `og:type = article`.
//! 3. Fallback: site title and description.
//!
//! Overrides then replace individual fields. Resolution is pure: no I/O,
//! no failure.

use super::meta::{ContentType, MetaOverrides, OgType, RouteMetadata};
use crate::config::SiteConfig;
use crate::core::{RoutePath, build_query};
use crate::store::Collection;

/// Fixed copy for one static route. `None` means "use the site's own".
struct StaticRoute {
    path: &'static str,
    title: Option<&'static str>,
    description: Option<&'static str>,
    content_type: ContentType,
}

/// `{name}` expands to the site name.
const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        title: None,
        description: None,
        content_type: ContentType::Default,
    },
    StaticRoute {
        path: "/blogs",
        title: Some("Blog"),
        description: Some(
            "Articles and tutorials by {name} on web development, programming and technology.",
        ),
        content_type: ContentType::Blog,
    },
    StaticRoute {
        path: "/projects",
        title: Some("Projects"),
        description: Some("Projects built by {name}: web applications, tools and experiments."),
        content_type: ContentType::Project,
    },
    StaticRoute {
        path: "/study-material",
        title: Some("Study Material"),
        description: Some("Notes, guides and study resources curated by {name}."),
        content_type: ContentType::Study,
    },
    StaticRoute {
        path: "/experience",
        title: Some("Experience"),
        description: Some("Professional experience and career journey of {name}."),
        content_type: ContentType::Default,
    },
    StaticRoute {
        path: "/contact",
        title: Some("Contact"),
        description: Some("Get in touch with {name} for collaborations, opportunities or questions."),
        content_type: ContentType::Default,
    },
];

/// Description template per detail pattern.
const fn detail_description(collection: Collection) -> &'static str {
    match collection {
        Collection::Blogs => "Read this article by {name} on web development and programming.",
        Collection::Projects => "Explore this project by {name}: features, stack and source.",
        Collection::StudyMaterial => "Study notes and learning resources shared by {name}.",
    }
}

/// Matched route before overrides.
struct Template {
    /// Bare title, shown on the preview card.
    title: String,
    /// Append ` | <site name>` to the page title.
    suffixed: bool,
    description: String,
    og_type: OgType,
    content_type: ContentType,
    /// Pass the path to the card footer. Off for the fallback so every
    /// unknown route shares one card.
    card_path: bool,
}

/// Resolves route paths to [`RouteMetadata`].
#[derive(Debug, Clone, Copy)]
pub struct MetaTagResolver<'a> {
    config: &'a SiteConfig,
}

impl<'a> MetaTagResolver<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Paths of the static route table, home first.
    pub fn static_paths() -> impl Iterator<Item = &'static str> {
        STATIC_ROUTES.iter().map(|route| route.path)
    }

    /// Resolve a raw request path (query, fragment and encoding allowed).
    pub fn resolve_str(&self, path: &str, overrides: &MetaOverrides) -> RouteMetadata {
        self.resolve(&RoutePath::from_browser(path), overrides)
    }

    pub fn resolve(&self, path: &RoutePath, overrides: &MetaOverrides) -> RouteMetadata {
        let template = self.match_template(path);
        let info = &self.config.site.info;

        let card_title = overrides.title.clone().unwrap_or(template.title);
        let title = match overrides.title {
            Some(_) if !path.is_root() => self.config.suffixed_title(&card_title),
            None if template.suffixed => self.config.suffixed_title(&card_title),
            _ => card_title.clone(),
        };

        let content_type = overrides.content_type.unwrap_or(template.content_type);

        let image = match &overrides.image {
            Some(image) => image.clone(),
            None if self.config.preview.enable => {
                let card_path = template.card_path.then_some(path.as_str());
                self.preview_url(
                    &card_title,
                    content_type,
                    card_path,
                    overrides.card_image.as_deref(),
                )
            }
            None => overrides
                .card_image
                .clone()
                .unwrap_or_else(|| info.image.clone()),
        };

        RouteMetadata {
            title,
            description: overrides
                .description
                .clone()
                .unwrap_or(template.description),
            image,
            canonical_url: overrides
                .canonical_url
                .clone()
                .unwrap_or_else(|| self.config.absolute_url(&path.to_encoded())),
            og_type: overrides.og_type.unwrap_or(template.og_type),
            published_date: overrides.published_date.clone(),
            tags: overrides.tags.clone().unwrap_or_default(),
            content_type,
            read_time: overrides.read_time,
        }
    }

    /// Absolute preview card URL:
    /// `<base><endpoint>?title=..&type=..[&path=..][&image=..]`.
    pub fn preview_url(
        &self,
        title: &str,
        content_type: ContentType,
        path: Option<&str>,
        image: Option<&str>,
    ) -> String {
        let mut pairs = vec![("title", title), ("type", content_type.as_str())];
        if let Some(path) = path {
            pairs.push(("path", path));
        }
        if let Some(image) = image {
            pairs.push(("image", image));
        }

        format!(
            "{}{}?{}",
            self.config.site.info.base_url(),
            self.config.preview.endpoint,
            build_query(pairs)
        )
    }

    fn match_template(&self, path: &RoutePath) -> Template {
        if let Some(route) = STATIC_ROUTES.iter().find(|r| r.path == path.as_str()) {
            return Template {
                title: route
                    .title
                    .map_or_else(|| self.config.site.info.title.clone(), str::to_string),
                suffixed: route.title.is_some(),
                description: route
                    .description
                    .map_or_else(|| self.site_description(), |d| self.expand(d)),
                og_type: OgType::Website,
                content_type: route.content_type,
                card_path: true,
            };
        }

        if let Some((collection, _id)) = Collection::match_detail(path) {
            let content_type = collection.content_type();
            return Template {
                title: content_type.label().to_string(),
                suffixed: true,
                description: self.expand(detail_description(collection)),
                og_type: OgType::Article,
                content_type,
                card_path: true,
            };
        }

        Template {
            title: self.config.site.info.title.clone(),
            suffixed: false,
            description: self.site_description(),
            og_type: OgType::Website,
            content_type: ContentType::Default,
            card_path: false,
        }
    }

    fn expand(&self, template: &str) -> String {
        template.replace("{name}", self.config.site.info.site_name())
    }

    fn site_description(&self) -> String {
        let description = self.config.site.info.description.trim();
        if description.is_empty() {
            self.expand("Personal portfolio of {name}.")
        } else {
            description.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::estimate_read_time;
    use crate::core::Query;

    fn resolve(config: &SiteConfig, path: &str) -> RouteMetadata {
        MetaTagResolver::new(config).resolve_str(path, &MetaOverrides::default())
    }

    #[test]
    fn test_encoded_question_mark_in_id() {
        let config = test_parse_config("");
        let meta = resolve(&config, "/blogs/what%3F");
        assert_eq!(meta.canonical_url, "https://example.dev/blogs/what%3F");
    }

    #[test]
    fn test_static_table() {
        let config = test_parse_config("");

        let home = resolve(&config, "/");
        assert_eq!(home.title, "Test Site");
        assert_eq!(home.description, "Test description");
        assert_eq!(home.og_type, OgType::Website);
        assert_eq!(home.canonical_url, "https://example.dev/");

        let blogs = resolve(&config, "/blogs");
        assert_eq!(blogs.title, "Blog | Test Author");
        assert_eq!(
            blogs.description,
            "Articles and tutorials by Test Author on web development, programming and technology."
        );
        assert_eq!(blogs.og_type, OgType::Website);
        assert_eq!(blogs.content_type, ContentType::Blog);

        for route in STATIC_ROUTES {
            let meta = resolve(&config, route.path);
            assert_eq!(meta.og_type, OgType::Website, "{}", route.path);
            assert_eq!(meta.content_type, route.content_type, "{}", route.path);
        }
    }

    #[test]
    fn test_trailing_slash_and_query() {
        let config = test_parse_config("");
        assert_eq!(resolve(&config, "/blogs/"), resolve(&config, "/blogs"));
        assert_eq!(resolve(&config, "/contact?ref=x#top"), resolve(&config, "/contact"));
    }

    #[test]
    fn test_detail_patterns() {
        let config = test_parse_config("");

        for (path, label, ty) in [
            ("/blogs/abc", "Blog Post", ContentType::Blog),
            ("/projects/42", "Project", ContentType::Project),
            ("/study-material/x", "Study Material", ContentType::Study),
        ] {
            let meta = resolve(&config, path);
            assert_eq!(meta.og_type, OgType::Article);
            assert_eq!(meta.title, format!("{label} | Test Author"));
            assert!(meta.title.contains("| Test Author"));
            assert_eq!(meta.content_type, ty);
            assert_eq!(meta.canonical_url, format!("https://example.dev{path}"));
        }
    }

    #[test]
    fn test_fallback_is_default_metadata() {
        let config = test_parse_config("");

        let a = resolve(&config, "/nope");
        let mut b = resolve(&config, "/deeply/nested/unknown");
        assert_eq!(a.title, "Test Site");
        assert_eq!(a.description, "Test description");
        assert_eq!(a.og_type, OgType::Website);
        assert_eq!(a.content_type, ContentType::Default);
        assert_eq!(a.canonical_url, "https://example.dev/nope");
        assert_eq!(
            b.canonical_url,
            "https://example.dev/deeply/nested/unknown"
        );

        b.canonical_url = a.canonical_url.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_preview_url_round_trip() {
        let config = test_parse_config("");
        let meta = resolve(&config, "/blogs/hello%20world");

        let (base, _) = meta.image.split_once('?').unwrap();
        assert_eq!(base, "https://example.dev/api/og");

        let query = Query::from_url(&meta.image).unwrap();
        assert_eq!(query.get("title"), Some("Blog Post"));
        assert_eq!(query.get("type"), Some("blog"));
        assert_eq!(query.get("path"), Some("/blogs/hello world"));
        assert_eq!(query.get("image"), None);
    }

    #[test]
    fn test_overrides_replace_only_present_fields() {
        let config = test_parse_config("");
        let resolver = MetaTagResolver::new(&config);
        let base = resolver.resolve_str("/blogs/abc", &MetaOverrides::default());

        let overrides = MetaOverrides {
            title: Some("Rust & You".into()),
            tags: Some(vec!["rust".into()]),
            published_date: Some("2024-06-15T00:00:00Z".into()),
            read_time: Some(estimate_read_time("one two", 225)),
            card_image: Some("https://cdn.example.dev/cover.png".into()),
            ..Default::default()
        };
        let meta = resolver.resolve_str("/blogs/abc", &overrides);

        assert_eq!(meta.title, "Rust & You | Test Author");
        assert_eq!(meta.tags, ["rust"]);
        assert_eq!(meta.published_date.as_deref(), Some("2024-06-15T00:00:00Z"));
        assert_eq!(meta.read_time.unwrap().to_string(), "1 min read");
        assert_eq!(meta.description, base.description);
        assert_eq!(meta.og_type, base.og_type);
        assert_eq!(meta.canonical_url, base.canonical_url);

        let query = Query::from_url(&meta.image).unwrap();
        assert_eq!(query.get("title"), Some("Rust & You"));
        assert_eq!(query.get("image"), Some("https://cdn.example.dev/cover.png"));
    }

    #[test]
    fn test_explicit_image_override() {
        let config = test_parse_config("");
        let overrides = MetaOverrides {
            image: Some("https://cdn.example.dev/x.png".into()),
            ..Default::default()
        };
        let meta = MetaTagResolver::new(&config).resolve_str("/", &overrides);
        assert_eq!(meta.image, "https://cdn.example.dev/x.png");
    }

    #[test]
    fn test_previews_disabled() {
        let config = test_parse_config("[preview]\nenable = false");
        let meta = resolve(&config, "/blogs/abc");
        assert_eq!(meta.image, "https://example.dev/og.png");
    }

    #[test]
    fn test_empty_site_description() {
        let mut config = test_parse_config("");
        config.site.info.description.clear();
        assert_eq!(
            resolve(&config, "/").description,
            "Personal portfolio of Test Author."
        );
    }
}
