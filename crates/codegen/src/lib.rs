//! # pivotgen Codegen
//!
//! Pivot migration generation engine.
//!
//! Given two table names, this crate derives a canonical pivot table name
//! and migration class name, renders a stub template, and writes the result
//! to a timestamped file under `database/migrations/`.
//!
//! ## Modules
//!
//! - **context**: names derived from a table pair
//! - **inflector**: default English singular/plural rules
//! - **template**: placeholder substitution
//! - **migrations**: output file naming
//! - **generator**: the end-to-end `PivotMigrationGenerator`
//! - **config**: `generators.toml` loading
//! - **fs** / **clock**: collaborator implementations
//!

// ============================================================================
// Modules
// ============================================================================

pub mod clock;
pub mod config;
pub mod context;
pub mod fs;
pub mod generator;
pub mod inflector;
pub mod migrations;
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use clock::{FixedClock, SystemClock};
pub use config::{DEFAULT_CONFIG_FILE, DEFAULT_MIGRATION_EXTENSION, GeneratorsConfig};
pub use context::PivotContext;
pub use fs::{LocalFileSystem, MemoryFileSystem};
pub use generator::{MigrationPlan, PIVOT_KIND, PIVOT_LABEL, PivotMigrationGenerator};
pub use inflector::EnglishInflector;

use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for a generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project root; migrations land in `<base_dir>/database/migrations`
    pub base_dir: PathBuf,

    /// Extension of generated migration files, without the dot
    pub migration_extension: String,

    /// Render without creating directories or writing files
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            migration_extension: DEFAULT_MIGRATION_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project root
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the migration file extension
    pub fn with_migration_extension(mut self, ext: impl Into<String>) -> Self {
        self.migration_extension = ext.into();
        self
    }

    /// Render only, never write
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Path of the migration file
    pub path: PathBuf,

    /// Migration class name (e.g. `CreateRoleUserPivotTable`)
    pub class_name: String,

    /// Pivot table name (e.g. `role_user`)
    pub pivot_table_name: String,

    /// Rendered file content
    #[serde(skip)]
    pub content: String,

    /// Whether the file was written (false on dry runs)
    pub written: bool,
}

// ============================================================================
// Tests
// ============================================================================
