//! Generated documents served alongside the site.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;

pub use sitemap::Sitemap;
