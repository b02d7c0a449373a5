//! # Storage Layer
//!
//! A book lives in exactly one file, read and written whole. The [`BookStore`]
//! trait only moves raw bytes; decoding belongs to [`crate::model`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the file named on the command line
//!   - A missing file is reported as `None`, not as an error
//!   - Saving is a single truncating write (no temp file, no rename)
//!
//! - [`memory::InMemoryStore`]: byte buffer for tests
//!
//! There is no locking. Two processes editing the same file race, and the
//! last write wins.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Raw contents of the book, or `None` if it has never been written.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the whole book with `bytes`.
    fn save(&mut self, bytes: &[u8]) -> Result<()>;

    /// Where the book lives, for messages.
    fn path(&self) -> &Path;
}
