//! Content normalization.
//!
//! Turns stored record bodies into HTML and derives reading time and
//! excerpts from the result.
//!
//! ```text
//! raw body ──► ContentDocument ──► HTML ──┬──► read time
//!   (str | JSON)   PlainHtml | BlockList  └──► excerpt
//! ```

mod block;
mod document;
mod excerpt;
mod read_time;

pub use block::{Block, ListItem};
pub use document::{ContentDocument, normalize, normalize_str};
pub use excerpt::excerpt;
pub use read_time::{ReadTime, estimate_read_time, word_count};
