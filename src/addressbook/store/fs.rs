use super::BookStore;
use crate::error::{AddressBookError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILE_MODE: u32 = 0o644;

pub struct FileStore {
    path: PathBuf,
    file_mode: u32,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_mode: DEFAULT_FILE_MODE,
        }
    }

    /// Permission bits used when the file has to be created. Ignored off Unix.
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    pub fn file_mode(&self) -> u32 {
        self.file_mode
    }

    fn open_for_write(&self) -> std::io::Result<fs::File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.file_mode);
        }
        options.open(&self.path)
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(path = %self.path.display(), bytes = bytes.len(), "loaded address book");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "address book file does not exist");
                Ok(None)
            }
            Err(source) => Err(AddressBookError::FileRead {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        let write_err = |source| AddressBookError::FileWrite {
            path: self.path.clone(),
            source,
        };
        let mut file = self.open_for_write().map_err(write_err)?;
        file.write_all(bytes).map_err(write_err)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "saved address book");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
