//! Prerendered documents for the single-page app.
//!
//! - `shell` - `PageRenderer`: head tags + `[site.header]` assets → document
//! - `body` - article and listing markup inside `#root`
//! - `prerender` - route → record → metadata → document

mod body;
mod prerender;
mod shell;

pub use prerender::{Prepared, Prerenderer, record_overrides};
pub use shell::PageRenderer;
