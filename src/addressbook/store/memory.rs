use super::BookStore;
use crate::error::Result;
use crate::model::AddressBook;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    path: PathBuf,
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            path: PathBuf::from("memory.book"),
            bytes: None,
            saves: 0,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Some(bytes),
            ..Self::default()
        }
    }

    pub fn with_book(book: &AddressBook) -> Result<Self> {
        Ok(Self::with_bytes(book.to_bytes()?))
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Decodes whatever was last saved; empty book if nothing was.
    pub fn book(&self) -> Result<AddressBook> {
        AddressBook::from_bytes(self.bytes().unwrap_or_default())
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        self.bytes = Some(bytes.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Person, PhoneType};

    /// The three-person book used throughout the command tests.
    pub fn sample_book() -> AddressBook {
        AddressBook::new(vec![
            Person::new(1, "123", "123@gmail.com").with_phone("123456789", PhoneType::Mobile),
            Person::new(2, "234", "234@gmail.com"),
            Person::new(3, "345", "345@gmail.com"),
        ])
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_book(&sample_book()).unwrap()
    }
}
