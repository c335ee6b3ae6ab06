//! Filesystem implementations
//!
//! [`LocalFileSystem`] talks to the real disk. [`MemoryFileSystem`] keeps
//! files in a map so generator tests can observe writes without touching
//! the disk.

use pivotgen_core::FileSystem;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// LocalFileSystem
// ============================================================================

/// `std::fs`-backed filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

// ============================================================================
// MemoryFileSystem
// ============================================================================

/// In-memory filesystem.
///
/// Writes fail with `NotFound` unless the parent directory was created
/// first, matching what the local filesystem does.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.mark_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
        self
    }

    /// Current contents of a file, if present
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// All file paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    fn mark_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.dirs.borrow().contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.contents(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let parent_missing = path.parent().is_some_and(|parent| !self.dir_exists(parent));
        if parent_missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory missing for {}", path.display()),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.mark_dirs(path);
        Ok(())
    }
}
