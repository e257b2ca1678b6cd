//! Configuration section definitions.
//!
//! | Section      | Purpose                                   |
//! |--------------|-------------------------------------------|
//! | `[site]`     | Identity (info) and shell assets (header) |
//! | `[preview]`  | Social preview cards                      |
//! | `[content]`  | Record directory, reading speed, excerpts |
//! | `[serve]`    | HTTP server                               |

mod content;
mod preview;
mod serve;
pub mod site;

pub use content::ContentConfig;
pub use preview::{BackgroundsConfig, PreviewConfig};
pub use serve::ServeConfig;
pub use site::{HeaderConfig, ScriptEntry, SiteInfoConfig, SiteSectionConfig};
