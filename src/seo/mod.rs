//! Route metadata, head tags and social preview cards.
//!
//! - `resolve` - `MetaTagResolver`: path + overrides → `RouteMetadata`
//! - `head` - `HeadTags`: metadata → ordered `<head>` tags
//! - `jsonld` - schema.org structured data
//! - `og` - `PreviewImageRenderer`: the `/api/og` card

mod head;
mod jsonld;
mod meta;
mod og;
mod resolve;

pub use head::{CARD_HEIGHT, CARD_WIDTH, HeadTag, HeadTags};
pub use jsonld::structured_data;
pub use meta::{ContentType, MetaOverrides, OgType, RouteMetadata};
pub use og::{PreviewCardRequest, PreviewError, PreviewImageRenderer};
pub use resolve::MetaTagResolver;
