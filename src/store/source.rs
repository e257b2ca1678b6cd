//! Record sources.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{Collection, ContentRecord};
use crate::log;

/// Record lookup failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection}/{id} not found")]
    NotFound { collection: Collection, id: String },

    #[error("failed to read '{}'", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to parse '{}'", .0.display())]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Read-only access to published records.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, collection: Collection, id: &str) -> Result<ContentRecord, StoreError>;

    /// All records, newest first.
    fn list(&self, collection: Collection) -> Result<Vec<ContentRecord>, StoreError>;
}

/// Records stored as `<root>/<collection>/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(path: &Path) -> Result<ContentRecord, StoreError> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;
        let mut record: ContentRecord =
            serde_json::from_str(&text).map_err(|e| StoreError::Parse(path.to_path_buf(), e))?;

        if record.id.is_empty()
            && let Some(stem) = path.file_stem()
        {
            record.id = stem.to_string_lossy().into_owned();
        }
        Ok(record)
    }
}

impl RecordSource for FileSource {
    fn fetch(&self, collection: Collection, id: &str) -> Result<ContentRecord, StoreError> {
        let not_found = || StoreError::NotFound {
            collection,
            id: id.to_string(),
        };

        if !is_safe_id(id) {
            return Err(not_found());
        }

        let path = self
            .root
            .join(collection.segment())
            .join(format!("{id}.json"));

        match Self::read(&path) {
            Err(StoreError::Io(_, e)) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
            other => other,
        }
    }

    fn list(&self, collection: Collection) -> Result<Vec<ContentRecord>, StoreError> {
        let dir = self.root.join(collection.segment());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(dir, e)),
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::Io(dir.clone(), e))?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            // One broken file should not take the whole listing down.
            match Self::read(&path) {
                Ok(record) => records.push(record),
                Err(e) => log!("warning"; "skipping record: {e}"),
            }
        }

        records.sort_by(|a, b| {
            let key = |r: &ContentRecord| r.created().map(|t| t.unix_seconds());
            key(b).cmp(&key(a)).then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }
}

/// Ids are single path segments.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
