use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::AddressBookRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// On-disk layout of the address book.
#[derive(Serialize)]
struct StoredBook<'a> {
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct LoadedBook {
    #[serde(default)]
    records: Vec<Record>,
}

/// Address book repository backed by a single JSON file.
///
/// Records are written in address book order. Saving goes through a
/// temporary sibling file that is renamed over the target, so an
/// interrupted save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let loaded: LoadedBook = serde_json::from_str(&contents)?;
        let book = AddressBook::from_records(loaded.records)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        debug!(
            "Loaded {} records from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredBook {
            records: book.iter().collect(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        let temp_path = self.temp_path();
        let written = write_synced(&temp_path, json.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            warn!("Failed to save {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!("Saved {} records to {}", book.len(), self.path.display());
        Ok(())
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
