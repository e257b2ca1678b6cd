//! Content collections and their routes.

use std::fmt;

use crate::config::ContentConfig;
use crate::core::RoutePath;
use crate::seo::ContentType;

/// A routed collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Blogs,
    Projects,
    StudyMaterial,
}

impl Collection {
    /// Detail patterns are tried in this order.
    pub const ALL: [Self; 3] = [Self::Blogs, Self::Projects, Self::StudyMaterial];

    /// First path segment, also the directory name under `content/`.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Blogs => "blogs",
            Self::Projects => "projects",
            Self::StudyMaterial => "study-material",
        }
    }

    /// List page route (`/blogs`).
    pub const fn list_route(self) -> &'static str {
        match self {
            Self::Blogs => "/blogs",
            Self::Projects => "/projects",
            Self::StudyMaterial => "/study-material",
        }
    }

    /// Short heading used on the list page (`Blog`).
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Blogs => "Blog",
            Self::Projects => "Projects",
            Self::StudyMaterial => "Study Material",
        }
    }

    pub const fn content_type(self) -> ContentType {
        match self {
            Self::Blogs => ContentType::Blog,
            Self::Projects => ContentType::Project,
            Self::StudyMaterial => ContentType::Study,
        }
    }

    /// Reading speed for this collection's bodies.
    pub const fn wpm(self, config: &ContentConfig) -> u32 {
        match self {
            Self::StudyMaterial => config.study_wpm,
            Self::Blogs | Self::Projects => config.blog_wpm,
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.segment() == segment)
    }

    /// Match `/<segment>/<id>`, returning the collection and id.
    pub fn match_detail(path: &RoutePath) -> Option<(Self, &str)> {
        let mut segments = path.segments();
        let collection = Self::from_segment(segments.next()?)?;
        let id = segments.next()?;
        segments.next().is_none().then_some((collection, id))
    }

    /// Match the list route exactly.
    pub fn match_list(path: &RoutePath) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.list_route() == path.as_str())
    }

    pub fn detail_route(self, id: &str) -> RoutePath {
        RoutePath::new(&format!("{}/{}", self.list_route(), id))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}
