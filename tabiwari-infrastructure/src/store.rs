use std::{fs, io::ErrorKind, path::PathBuf};

use tabiwari_application::{StoreError, TripBook, TripStore};

/// Trip persistence as one pretty-printed JSON file — the stand-in for the
/// browser app's key-value storage.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TripStore for JsonFileStore {
    /// A missing file is a fresh trip, not an error.
    fn load(&self) -> Result<TripBook, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No trip file yet, starting fresh");
                return Ok(TripBook::default());
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&text).map_err(|err| StoreError::Corrupt {
            detail: err.to_string(),
        })
    }

    /// Writes to a sibling temp file first so a crash mid-write cannot
    /// truncate the previous snapshot.
    fn save(&self, book: &TripBook) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(book).map_err(|err| StoreError::Corrupt {
            detail: err.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
