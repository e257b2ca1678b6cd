//! Published content records.
//!
//! The site reads records through [`RecordSource`]; [`FileSource`] serves
//! them from the configured content directory.

mod collection;
mod record;
mod source;

pub use collection::Collection;
pub use record::ContentRecord;
pub use source::{FileSource, RecordSource, StoreError};
