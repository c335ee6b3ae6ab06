//! Collaborator traits for pivotgen
//!
//! The generator never touches the filesystem, configuration, inflection
//! rules, or the system clock directly. Each of these is reached through
//! one of the traits below so callers (and tests) can supply their own.

use crate::error::GenerationResult;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return a usage error if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    fn validate(&self) -> GenerationResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// FileSystem Trait
// ============================================================================

/// Filesystem capability used by generators
///
/// Implementations report raw `io::Error`s; the generator decides which
/// `GenerationError` each failure maps to.
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `contents`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Recursively create `path` and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}

// ============================================================================
// StubLocator Trait
// ============================================================================

/// Configuration lookup for stub templates
///
/// `kind` is the lowercase generator type (e.g. `"pivot"`), looked up as
/// `generators.<kind>_stub`.
pub trait StubLocator {
    /// Path of the stub for `kind`, or `None` when nothing is configured
    fn stub_path(&self, kind: &str) -> Option<PathBuf>;
}

// ============================================================================
// Inflector Trait
// ============================================================================

/// Singular/plural inflection of table names
pub trait Inflector {
    /// Singular form of `word` (e.g. "roles" → "role")
    fn singularize(&self, word: &str) -> String;

    /// Plural form of `word` (e.g. "status" → "statuses")
    fn pluralize(&self, word: &str) -> String;
}

// ============================================================================
// Clock Trait
// ============================================================================

/// Source of the current local time, used for migration timestamps
pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> chrono::NaiveDateTime;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> GenerationResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(GenerationError::invalid_table_name("x", "Invalid state"))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        assert!(TestValidatable { valid: true }.is_valid());
        assert!(!TestValidatable { valid: false }.is_valid());
    }

    struct EchoInflector;

    impl Inflector for EchoInflector {
        fn singularize(&self, word: &str) -> String {
            word.to_string()
        }

        fn pluralize(&self, word: &str) -> String {
            word.to_string()
        }
    }

    #[test]
    fn test_identity_inflector() {
        let inflector = EchoInflector;
        assert_eq!(inflector.singularize("users"), "users");
        assert_eq!(inflector.pluralize("user"), "user");
    }
}
