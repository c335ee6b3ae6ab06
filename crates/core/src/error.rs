//! Error types for pivotgen
//!
//! This module provides unified error handling for pivot migration
//! generation: usage errors, existing targets, stub lookup failures,
//! and filesystem write failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pivot migration generation
#[derive(Debug, Error)]
pub enum GenerationError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// A table name argument is unusable
    #[error("Invalid table name '{name}': {reason}")]
    InvalidTableName { name: String, reason: String },

    // ========================================================================
    // Existing Output
    // ========================================================================
    /// Target file already present and `force` was not set
    #[error("{kind} already exists: {path}")]
    AlreadyExists { kind: String, path: PathBuf },

    // ========================================================================
    // Stub / Configuration Errors
    // ========================================================================
    /// Configured stub path could not be read
    #[error("Stub not found at '{path}': {message}")]
    StubNotFound { path: PathBuf, message: String },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration in '{path}': {message}")]
    InvalidConfig { path: PathBuf, message: String },

    // ========================================================================
    // Write Errors
    // ========================================================================
    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },
}

impl GenerationError {
    /// Create an invalid table name error
    pub fn invalid_table_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        GenerationError::InvalidTableName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an already-exists error for the given generator kind
    pub fn already_exists(kind: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        GenerationError::AlreadyExists {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Create a stub-not-found error
    pub fn stub_not_found(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        GenerationError::StubNotFound {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, GenerationError::InvalidTableName { .. })
    }

    /// Check if the target file already existed
    pub fn is_already_exists(&self) -> bool {
        matches!(self, GenerationError::AlreadyExists { .. })
    }

    /// Check if the stub (or the configuration pointing at it) could not be loaded
    pub fn is_stub_not_found(&self) -> bool {
        matches!(
            self,
            GenerationError::StubNotFound { .. } | GenerationError::InvalidConfig { .. }
        )
    }

    /// Check if this error is a write failure
    pub fn is_write_failure(&self) -> bool {
        matches!(
            self,
            GenerationError::DirectoryCreate { .. } | GenerationError::FileWrite { .. }
        )
    }

    /// Process exit status for this error.
    ///
    /// `0` is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerationError::AlreadyExists { .. } => 1,
            GenerationError::InvalidTableName { .. } => 2,
            GenerationError::StubNotFound { .. } | GenerationError::InvalidConfig { .. } => 3,
            GenerationError::DirectoryCreate { .. } | GenerationError::FileWrite { .. } => 4,
        }
    }

    /// Stable snake_case identifier, used in machine-readable reports
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::InvalidTableName { .. } => "usage_error",
            GenerationError::AlreadyExists { .. } => "already_exists",
            GenerationError::StubNotFound { .. } | GenerationError::InvalidConfig { .. } => {
                "stub_not_found"
            }
            GenerationError::DirectoryCreate { .. } | GenerationError::FileWrite { .. } => {
                "write_failure"
            }
        }
    }
}

/// Result type alias using GenerationError
pub type GenerationResult<T> = Result<T, GenerationError>;

// ============================================================================
// Tests
// ============================================================================
