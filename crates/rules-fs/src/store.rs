//! The file access seam between the pure merge logic and the disk.
//!
//! [`DiskStore`] is what the binary uses. [`MemoryStore`] keeps everything in a
//! map so the scanner and the sync commands can be tested without touching
//! the filesystem.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::{Error, NormalizedPath, Result, io};

/// Read, existence and write access to files.
pub trait FileStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Read `path` as UTF-8 text.
    fn read(&self, path: &NormalizedPath) -> Result<String>;

    /// Read `path` as raw bytes, replacing invalid UTF-8.
    fn read_lossy(&self, path: &NormalizedPath) -> Result<String>;

    /// Create or replace `path` with `content`.
    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()>;
}

/// Read a target file, degrading to an empty string when it cannot be read.
///
/// The primary UTF-8 read is tried first, then a lossy raw read. If both fail
/// the file is treated as empty, which gives fresh-create semantics to the
/// caller.
pub fn read_or_empty<S: FileStore + ?Sized>(store: &S, path: &NormalizedPath) -> String {
    match store.read(path) {
        Ok(content) => content,
        Err(primary) => {
            if store.exists(path) {
                tracing::warn!(path = %path, error = %primary, "primary read failed, retrying raw read");
            }
            match store.read_lossy(path) {
                Ok(content) => content,
                Err(fallback) => {
                    if store.exists(path) {
                        tracing::warn!(path = %path, error = %fallback, "raw read failed, treating file as empty");
                    }
                    String::new()
                }
            }
        }
    }
}

/// [`FileStore`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for DiskStore {
    fn exists(&self, path: &NormalizedPath) -> bool {
        path.exists()
    }

    fn read(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn read_lossy(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text_lossy(path)
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        io::write_text(path, content)
    }
}

/// In-memory [`FileStore`].
///
/// Files are stored as bytes so invalid UTF-8 can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<NormalizedPath, Vec<u8>>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text file.
    pub fn insert(&self, path: impl Into<NormalizedPath>, content: &str) {
        self.insert_bytes(path, content.as_bytes().to_vec());
    }

    /// Add a file with arbitrary bytes.
    pub fn insert_bytes(&self, path: impl Into<NormalizedPath>, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(path.into(), bytes);
    }

    /// Current text of a file, if present.
    pub fn get(&self, path: impl Into<NormalizedPath>) -> Option<String> {
        self.files
            .borrow()
            .get(&path.into())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of successful [`FileStore::write`] calls.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn not_found(path: &NormalizedPath) -> Error {
        Error::io(
            path.to_native(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        )
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &NormalizedPath) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &NormalizedPath) -> Result<String> {
        let files = self.files.borrow();
        let bytes = files.get(path).ok_or_else(|| Self::not_found(path))?;
        String::from_utf8(bytes.clone()).map_err(|e| {
            Error::io(
                path.to_native(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    fn read_lossy(&self, path: &NormalizedPath) -> Result<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &NormalizedPath, content: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.clone(), content.as_bytes().to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
